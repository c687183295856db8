//! Property defaulting disciplines
//!
//! Every component declares a table mapping each defaultable property to one
//! of three merge rules. `mount` walks its properties through
//! [`Defaults::apply`], which looks the rule up in the table, so the rule a
//! property follows is data rather than an operator scattered in code.
//!
//! | Rule       | Result                                                        |
//! |------------|---------------------------------------------------------------|
//! | `Or`       | explicit truthy, else config truthy (`true` on either side wins) |
//! | `Coalesce` | explicit when present (even `false`/`0`/`""`), else config    |
//! | `Falsy`    | explicit when truthy, else config, else the literal fallback   |

use serde_json::Value;

use crate::config::ComponentOptions;

/// Literal used when neither the caller nor the config supplies a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    None,
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl Fallback {
    fn to_value(self) -> Option<Value> {
        match self {
            Self::None => None,
            Self::Str(s) => Some(Value::String(s.to_string())),
            Self::Int(i) => Some(Value::from(i)),
            Self::Bool(b) => Some(Value::Bool(b)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Merge {
    Or,
    Coalesce,
    Falsy(Fallback),
}

/// One row of a component's defaulting table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Config key (snake_case)
    pub key: &'static str,
    pub merge: Merge,
}

impl Rule {
    pub const fn or(key: &'static str) -> Self {
        Self {
            key,
            merge: Merge::Or,
        }
    }

    pub const fn coalesce(key: &'static str) -> Self {
        Self {
            key,
            merge: Merge::Coalesce,
        }
    }

    pub const fn falsy(key: &'static str, fallback: Fallback) -> Self {
        Self {
            key,
            merge: Merge::Falsy(fallback),
        }
    }
}

/// A value a property can hold
pub trait PropValue: Sized + Clone {
    /// Read from a config value; wrong types yield `None`
    fn from_value(value: &Value) -> Option<Self>;

    fn is_falsy(&self) -> bool;
}

impl PropValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl PropValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn is_falsy(&self) -> bool {
        *self == 0
    }
}

impl PropValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl PropValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl PropValue for Vec<Value> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl PropValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        (!value.is_null()).then(|| value.clone())
    }

    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(_) => false,
        }
    }
}

/// Apply a single rule to an explicit value and a config value
pub fn merge<T: PropValue>(rule: Merge, explicit: Option<T>, configured: Option<T>) -> Option<T> {
    let truthy = |v: &Option<T>| v.as_ref().is_some_and(|v| !v.is_falsy());
    match rule {
        Merge::Or => {
            if truthy(&explicit) {
                explicit
            } else if truthy(&configured) {
                configured
            } else {
                explicit.or(configured)
            }
        }
        Merge::Coalesce => explicit.or(configured),
        Merge::Falsy(fallback) => {
            if truthy(&explicit) {
                explicit
            } else {
                configured.or_else(|| fallback.to_value().and_then(|v| T::from_value(&v)))
            }
        }
    }
}

#[cfg(test)]
thread_local! {
    static APPLIED: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Keys passed to [`Defaults::apply`] on this thread since the last call
#[cfg(test)]
pub(crate) fn take_applied() -> Vec<String> {
    APPLIED.with(|applied| std::mem::take(&mut *applied.borrow_mut()))
}

/// Defaulting pass for one component instance
pub struct Defaults<'a> {
    options: ComponentOptions<'a>,
    rules: &'static [Rule],
}

impl<'a> Defaults<'a> {
    pub fn new(options: ComponentOptions<'a>, rules: &'static [Rule]) -> Self {
        Self { options, rules }
    }

    pub fn options(&self) -> ComponentOptions<'a> {
        self.options
    }

    pub fn rule(&self, key: &str) -> Option<Merge> {
        self.rules.iter().find(|r| r.key == key).map(|r| r.merge)
    }

    /// Resolve one property in place using its table rule
    pub fn apply<T: PropValue>(&self, key: &str, slot: &mut Option<T>) {
        #[cfg(test)]
        APPLIED.with(|applied| applied.borrow_mut().push(key.to_string()));

        let Some(rule) = self.rule(key) else {
            debug_assert!(false, "no defaulting rule for '{}'", key);
            tracing::warn!("No defaulting rule for property '{}'", key);
            return;
        };
        let configured = self.options.get(key).and_then(T::from_value);
        *slot = merge(rule, slot.take(), configured);
    }
}

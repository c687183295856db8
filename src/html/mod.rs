//! HTML attribute composition
//!
//! Components never emit markup themselves. They hand an ordered attribute
//! map to the template layer, which either iterates it or asks for the
//! pre-rendered `key="value"` string built here.

mod classes;

pub use classes::{build_classes, ClassList};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Escape text for use inside a double-quoted HTML attribute or text node
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Insertion-ordered HTML attribute map
///
/// Values keep their JSON type until rendering:
/// - `true` renders as a bare attribute (`disabled`)
/// - `false` and `null` are omitted entirely
/// - everything else renders as `key="escaped value"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set an attribute, keeping its original position if it already exists
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present
    pub fn set_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.0.insert(key.into(), value.into());
        }
        self
    }

    /// Set a bare boolean attribute (`disabled`, `hidden`, ...)
    pub fn flag(&mut self, key: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), Value::Bool(true));
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String view of an attribute (numbers and booleans are not coerced)
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Right-biased shallow merge: keys from `extra` overwrite keys here
    pub fn merge(&mut self, extra: &Attributes) -> &mut Self {
        for (key, value) in &extra.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// Render to an attribute string (no leading space)
    pub fn render(&self) -> String {
        render_html_attributes(self)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Attributes> for Value {
    fn from(attrs: Attributes) -> Self {
        Value::Object(attrs.0)
    }
}

/// Merge two attribute maps, `extra` winning on conflicts
pub fn merge_attributes(base: &Attributes, extra: &Attributes) -> Attributes {
    let mut merged = base.clone();
    merged.merge(extra);
    merged
}

/// Render attributes as `key="value"` pairs separated by single spaces
pub fn render_html_attributes(attrs: &Attributes) -> String {
    let mut parts = Vec::with_capacity(attrs.len());
    for (key, value) in &attrs.0 {
        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => parts.push(escape_html(key)),
            Value::String(s) => parts.push(format!("{}=\"{}\"", escape_html(key), escape_html(s))),
            other => parts.push(format!(
                "{}=\"{}\"",
                escape_html(key),
                escape_html(&other.to_string())
            )),
        }
    }
    parts.join(" ")
}

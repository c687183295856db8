//! Behavior-hook (`data-controller`) attributes

use serde_json::Value;

use crate::html::Attributes;

/// Ordered set of controller identifiers plus their value attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controllers {
    names: Vec<String>,
    values: Attributes,
}

impl Controllers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a controller (ignored when already attached or blank)
    pub fn add(&mut self, name: &str) -> &mut Self {
        let name = name.trim();
        if !name.is_empty() && !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        self
    }

    pub fn add_opt(&mut self, name: Option<&str>) -> &mut Self {
        if let Some(name) = name {
            self.add(name);
        }
        self
    }

    /// Add a `data-{controller}-{name}-value` attribute
    pub fn value(&mut self, controller: &str, name: &str, value: impl Into<Value>) -> &mut Self {
        let value = match value.into() {
            // Booleans are sent as text so `false` is not dropped on render
            Value::Bool(b) => Value::String(b.to_string()),
            other => other,
        };
        self.values
            .set(format!("data-{}-{}-value", controller, kebab_case(name)), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `data-controller` followed by value attributes; empty when no controller
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if self.names.is_empty() {
            return attrs;
        }
        attrs.set("data-controller", self.names.join(" "));
        attrs.merge(&self.values);
        attrs
    }
}

/// `autoHide` / `auto_hide` -> `auto-hide`
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c == '_' || c == ' ' {
            out.push('-');
        } else if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_controllers_render_nothing() {
        let mut c = Controllers::new();
        c.value("bs-alert", "autoHide", true);
        assert!(c.attributes().is_empty());
    }

    #[test]
    fn test_controller_with_values() {
        let mut c = Controllers::new();
        c.add("bs-alert")
            .value("bs-alert", "autoHide", true)
            .value("bs-alert", "delay", 3000);
        assert_eq!(
            c.attributes().render(),
            "data-controller=\"bs-alert\" data-bs-alert-auto-hide-value=\"true\" data-bs-alert-delay-value=\"3000\""
        );
    }

    #[test]
    fn test_controllers_are_deduplicated() {
        let mut c = Controllers::new();
        c.add("bs-tooltip").add("bs-link").add("bs-tooltip").add(" ");
        assert_eq!(c.names(), ["bs-tooltip", "bs-link"]);
        assert_eq!(
            c.attributes().get_str("data-controller"),
            Some("bs-tooltip bs-link")
        );
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("autoHide"), "auto-hide");
        assert_eq!(kebab_case("auto_collapse"), "auto-collapse");
        assert_eq!(kebab_case("delay"), "delay");
    }
}

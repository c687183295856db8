//! Per-component default options
//!
//! Library defaults are compiled in from `defaults.toml`. User tables from
//! `[components.<name>]` overlay them key by key. The result is read-only for
//! the rest of the process.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Library defaults shipped with the binary
pub const LIBRARY_DEFAULTS: &str = include_str!("defaults.toml");

/// Options map for one component
pub type OptionsMap = Map<String, Value>;

/// Mapping from component name to its default options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentConfig {
    components: BTreeMap<String, OptionsMap>,
}

impl ComponentConfig {
    pub fn new(components: BTreeMap<String, OptionsMap>) -> Self {
        Self {
            components: components
                .into_iter()
                .map(|(name, options)| (normalize_name(&name), options))
                .collect(),
        }
    }

    /// Parse a TOML document whose top-level tables are component names
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        let components: BTreeMap<String, OptionsMap> = toml::from_str(s)?;
        Ok(Self::new(components))
    }

    /// Built-in defaults. An unparseable embedded file degrades to no defaults.
    pub fn library_defaults() -> Self {
        match Self::from_toml_str(LIBRARY_DEFAULTS) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Built-in component defaults are invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Overlay user options on top of these, user keys winning per option
    pub fn with_overrides(mut self, overrides: BTreeMap<String, OptionsMap>) -> Self {
        for (name, options) in overrides {
            let entry = self.components.entry(normalize_name(&name)).or_default();
            for (key, value) in options {
                entry.insert(key, value);
            }
        }
        self
    }

    /// Lookup for one component (empty view when nothing is configured)
    pub fn component(&self, name: &str) -> ComponentOptions<'_> {
        ComponentOptions {
            options: self.components.get(&normalize_name(name)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.components.keys()
    }

    pub fn raw(&self) -> &BTreeMap<String, OptionsMap> {
        &self.components
    }

    /// Options that are new or changed relative to `base`, per component
    pub fn overrides_from(&self, base: &ComponentConfig) -> BTreeMap<String, OptionsMap> {
        self.components
            .iter()
            .filter_map(|(name, options)| {
                let base_options = base.components.get(name);
                let changed: OptionsMap = options
                    .iter()
                    .filter(|(key, value)| {
                        !value.is_null() && base_options.and_then(|b| b.get(*key)) != Some(*value)
                    })
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                (!changed.is_empty()).then(|| (name.clone(), changed))
            })
            .collect()
    }
}

/// `AccordionItem`, `accordion_item` and `accordion-item` name the same table
fn normalize_name(name: &str) -> String {
    crate::traits::stimulus::kebab_case(name).replace("--", "-")
}

/// Typed, total accessors over one component's options
///
/// Absent keys and wrong-typed values yield the supplied fallback; nothing
/// here can fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentOptions<'a> {
    options: Option<&'a OptionsMap>,
}

impl<'a> ComponentOptions<'a> {
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.options
            .and_then(|o| o.get(key))
            .filter(|v| !v.is_null())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn string(&self, key: &str, fallback: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn bool(&self, key: &str, fallback: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(fallback)
    }

    pub fn int(&self, key: &str, fallback: i64) -> i64 {
        self.get(key).and_then(Value::as_i64).unwrap_or(fallback)
    }

    /// Integers are accepted as floats; strings are not
    pub fn float(&self, key: &str, fallback: f64) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or(fallback)
    }

    pub fn array(&self, key: &str) -> Vec<Value> {
        self.get(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// String entries of an array option; non-string entries are skipped
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.array(key)
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect()
    }

    pub fn map(&self, key: &str) -> Option<&'a OptionsMap> {
        self.get(key).and_then(Value::as_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ComponentConfig {
        ComponentConfig::from_toml_str(
            r#"
[button]
variant = "secondary"
outline = true
icon_gap = 3
ratio = 1.5
tags = ["a", 1, "b"]

[accordion-item]
heading_tag = "h3"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_typed_accessors() {
        let config = config();
        let button = config.component("button");
        assert_eq!(button.string("variant", "primary"), "secondary");
        assert!(button.bool("outline", false));
        assert_eq!(button.int("icon_gap", 2), 3);
        assert_eq!(button.float("ratio", 0.0), 1.5);
        assert_eq!(button.float("icon_gap", 0.0), 3.0);
        assert_eq!(button.string_list("tags"), vec!["a", "b"]);
    }

    #[test]
    fn test_wrong_type_and_absent_yield_fallback() {
        let config = config();
        let button = config.component("button");
        assert_eq!(button.int("variant", 7), 7);
        assert!(!button.bool("variant", false));
        assert_eq!(button.string("outline", "x"), "x");
        assert_eq!(button.string("missing", "fallback"), "fallback");
        assert!(button.array("variant").is_empty());

        let unknown = config.component("nope");
        assert_eq!(unknown.string("variant", "primary"), "primary");
        assert!(!unknown.has("variant"));
    }

    #[test]
    fn test_name_normalization() {
        let config = config();
        assert_eq!(config.component("AccordionItem").string("heading_tag", "h2"), "h3");
        assert_eq!(config.component("accordion_item").string("heading_tag", "h2"), "h3");
    }

    #[test]
    fn test_overrides_win_per_key() {
        let mut overrides = BTreeMap::new();
        let mut button = OptionsMap::new();
        button.insert("variant".into(), json!("danger"));
        overrides.insert("button".to_string(), button);

        let merged = config().with_overrides(overrides);
        let button = merged.component("button");
        assert_eq!(button.string("variant", ""), "danger");
        // Untouched keys survive
        assert!(button.bool("outline", false));
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let mut map = OptionsMap::new();
        map.insert("variant".into(), Value::Null);
        let mut components = BTreeMap::new();
        components.insert("alert".to_string(), map);
        let config = ComponentConfig::new(components);
        assert!(!config.component("alert").has("variant"));
    }

    #[test]
    fn test_library_defaults_parse() {
        let parsed = ComponentConfig::from_toml_str(LIBRARY_DEFAULTS);
        assert!(parsed.is_ok(), "defaults.toml must parse: {:?}", parsed.err());
        let defaults = ComponentConfig::library_defaults();
        assert_eq!(defaults.component("alert").string("variant", ""), "primary");
    }
}

//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{ComponentConfig, Config, OptionsMap};
use crate::routing::Route;
use crate::search::SearchEntry;

/// Quoted, escaped TOML string
fn toml_str(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

fn toml_list(items: &[String]) -> String {
    toml::Value::Array(items.iter().cloned().map(toml::Value::String).collect()).to_string()
}

#[derive(Serialize)]
struct RoutesDoc<'a> {
    routes: &'a [Route],
}

#[derive(Serialize)]
struct EntriesDoc<'a> {
    search: EntriesTable<'a>,
}

#[derive(Serialize)]
struct EntriesTable<'a> {
    entries: &'a [SearchEntry],
}

#[derive(Serialize)]
struct ComponentsDoc<'a> {
    components: &'a BTreeMap<String, OptionsMap>,
}

/// Serialize a wrapper document, falling back to a comment when a value has no TOML form
fn section<T: Serialize>(doc: &T, what: &str) -> String {
    match toml::to_string(doc) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Could not serialize {}: {}", what, e);
            format!("# {} could not be serialized: {}\n", what, e)
        }
    }
}

impl Config {
    /// Serialize `[[search.entries]]`
    pub(super) fn search_entries_to_toml(&self) -> String {
        if self.search.entries.is_empty() {
            return r#"
# Extra entries that are not derived from routes
# [[search.entries]]
# title = "Changelog"
# description = "Release notes"
# url = "/changelog"
# type = "page"
# keywords = ["releases", "history"]
"#
            .to_string();
        }
        let doc = EntriesDoc {
            search: EntriesTable {
                entries: &self.search.entries,
            },
        };
        format!("\n{}", section(&doc, "search entries"))
    }

    /// Serialize `[theme.attributes]`
    pub(super) fn theme_attributes_to_toml(&self) -> String {
        if self.theme.attributes.is_empty() {
            return r#"
# Extra attributes for the <html> element
# [theme.attributes]
# lang = "en"
"#
            .to_string();
        }

        let mut output = String::from("\n[theme.attributes]\n");
        for (key, value) in &self.theme.attributes {
            output.push_str(&format!("{} = {}\n", toml_str(key), toml_str(value)));
        }
        output
    }

    /// Serialize `[[routes]]`
    pub(super) fn routes_to_toml(&self) -> String {
        if self.routes.is_empty() {
            return r#"
# Route table used by breadcrumbs and search
# [[routes]]
# name = "app_home"
# path = "/"
#
# [[routes]]
# name = "app_shop_edit"
# path = "/shop/{id}/edit"
# title = "Edit product"
# keywords = ["catalog"]
"#
            .to_string();
        }
        format!("\n{}", section(&RoutesDoc { routes: &self.routes }, "routes"))
    }

    /// Serialize `[components.X]`, only keys that differ from the built-in defaults
    pub(super) fn components_to_toml(&self) -> String {
        let overrides = self
            .components
            .overrides_from(&ComponentConfig::library_defaults());
        if overrides.is_empty() {
            return r#"
# Per-component defaults (snake_case keys, overlay the built-in defaults)
# [components.button]
# variant = "secondary"
# size = "sm"
#
# [components.alert]
# dismissible = true
"#
            .to_string();
        }
        format!(
            "\n{}",
            section(&ComponentsDoc { components: &overrides }, "component defaults")
        )
    }

    /// Generate a TOML config file template from this config
    ///
    /// This is the single source of truth for the config file format.
    /// Used by `ensure_config_exists()` and `strapkit config --show`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# strapkit configuration

# HTTP API bind address (STRAPKIT_BIND overrides)
bind_addr = {bind}

# Project root; documentation for search is read below it (STRAPKIT_PROJECT_DIR overrides)
project_dir = {project_dir}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}

# Search index built from the route table and documentation
[search]
default_limit = {default_limit}
max_limit = {max_limit}
api_prefixes = {api_prefixes}
ignore_routes = {ignore_routes}  # exact names, or prefixes ending in *
docs_dir = {docs_dir}
docs_url_prefix = {docs_url_prefix}
{entries}
# Document-level theme
[theme]
mode = "{theme_mode}"  # light, dark, auto
{theme_attributes}{routes}{components}"#,
            bind = toml_str(&self.bind_addr.to_string()),
            project_dir = toml_str(&self.project_dir.to_string_lossy()),
            log_level = toml_str(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_str(&self.logging.file_dir.to_string_lossy()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_str(&self.logging.file_prefix),
            default_limit = self.search.default_limit,
            max_limit = self.search.max_limit,
            api_prefixes = toml_list(&self.search.api_prefixes),
            ignore_routes = toml_list(&self.search.ignore_routes),
            docs_dir = toml_str(&self.search.docs_dir),
            docs_url_prefix = toml_str(&self.search.docs_url_prefix),
            entries = self.search_entries_to_toml(),
            theme_mode = self.theme.mode.as_str(),
            theme_attributes = self.theme_attributes_to_toml(),
            routes = self.routes_to_toml(),
            components = self.components_to_toml(),
        )
    }
}

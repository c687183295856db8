//! Document-level theme attributes
//!
//! Templates call this once per page for the `<html>` element. The string is
//! computed when the runtime is created and never changes afterwards.

use crate::config::{ThemeConfig, ThemeMode};
use crate::html::Attributes;

#[derive(Debug, Clone)]
pub struct ThemeRuntime {
    attributes: Attributes,
    rendered: String,
}

impl ThemeRuntime {
    pub fn new(config: &ThemeConfig) -> Self {
        let mut attributes = Attributes::new();
        if config.mode != ThemeMode::Auto {
            attributes.set("data-bs-theme", config.mode.as_str());
        }
        for (key, value) in &config.attributes {
            attributes.set(key.as_str(), value.as_str());
        }
        let rendered = attributes.render();
        tracing::debug!("Theme attributes: {}", rendered);
        Self {
            attributes,
            rendered,
        }
    }

    /// Rendered attribute string (`data-bs-theme="dark" lang="en"`)
    pub fn html_attributes(&self) -> &str {
        &self.rendered
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Default for ThemeRuntime {
    fn default() -> Self {
        Self::new(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeRuntime::default().html_attributes(), "data-bs-theme=\"light\"");
    }

    #[test]
    fn test_auto_omits_theme_attribute() {
        let config = ThemeConfig {
            mode: ThemeMode::Auto,
            ..Default::default()
        };
        let runtime = ThemeRuntime::new(&config);
        assert_eq!(runtime.html_attributes(), "");
        assert!(runtime.attributes().is_empty());
    }

    #[test]
    fn test_extra_attributes_follow_mode() {
        let mut config = ThemeConfig {
            mode: ThemeMode::Dark,
            ..Default::default()
        };
        config.attributes.insert("lang".to_string(), "en".to_string());
        config.attributes.insert("class".to_string(), "h-100".to_string());
        let runtime = ThemeRuntime::new(&config);
        assert_eq!(
            runtime.html_attributes(),
            "data-bs-theme=\"dark\" class=\"h-100\" lang=\"en\""
        );
    }
}

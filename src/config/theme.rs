//! Document-level theme settings

use serde::Deserialize;
use std::collections::BTreeMap;

/// Color mode written to `data-bs-theme`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Leave the attribute off and let the client pick
    Auto,
}

impl ThemeMode {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            "auto" => Self::Auto,
            other => {
                tracing::warn!("Unknown theme mode '{}', using light", other);
                Self::Light
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    /// Extra attributes for the `<html>` element, in key order
    pub attributes: BTreeMap<String, String>,
}

/// Theme settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTheme {
    pub mode: Option<String>,
    pub attributes: Option<BTreeMap<String, String>>,
}

impl ThemeConfig {
    pub fn from_file(file: Option<FileTheme>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            mode: file
                .mode
                .map(|m| ThemeMode::from_str(&m))
                .unwrap_or_default(),
            attributes: file.attributes.unwrap_or_default(),
        }
    }
}

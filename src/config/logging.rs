//! `[logging]` section

use serde::Deserialize;
use std::path::PathBuf;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

const ROTATIONS: &[(&str, LogRotation)] = &[
    ("hourly", LogRotation::Hourly),
    ("daily", LogRotation::Daily),
    ("never", LogRotation::Never),
];

impl LogRotation {
    /// Case-insensitive; unknown names roll daily
    pub fn from_str(s: &str) -> Self {
        ROTATIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, rotation)| *rotation)
            .unwrap_or_else(|| {
                tracing::warn!("Unknown log rotation '{}', using daily", s);
                Self::Daily
            })
    }

    pub fn as_str(&self) -> &'static str {
        ROTATIONS
            .iter()
            .find(|(_, rotation)| rotation == self)
            .map(|(name, _)| *name)
            .unwrap_or("daily")
    }
}

/// Where strapkit's own diagnostics go. Stderr is always on; the JSON file
/// sink is opt-in.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level for the `strapkit` target when RUST_LOG is unset
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem, `strapkit` -> `strapkit.2026-10-19`
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: "strapkit".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

/// Lowercased level, or `None` when it is not one tracing understands
fn normalize_level(level: &str) -> Option<String> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS.contains(&level.as_str()).then_some(level)
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let mut config = Self::default();

        if let Some(level) = file.level {
            match normalize_level(&level) {
                Some(level) => config.level = level,
                None => tracing::warn!("Unknown log level '{}', using {}", level, config.level),
            }
        }
        if let Some(enabled) = file.file_enabled {
            config.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir.filter(|d| !d.trim().is_empty()) {
            config.file_dir = PathBuf::from(dir);
        }
        if let Some(rotation) = file.file_rotation {
            config.file_rotation = LogRotation::from_str(&rotation);
        }
        if let Some(prefix) = file.file_prefix.filter(|p| !p.trim().is_empty()) {
            config.file_prefix = prefix;
        }
        config
    }
}

//! Configuration for strapkit
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/strapkit/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Component defaults follow their own layering: the tables embedded from
//! `defaults.toml`, overlaid key by key with `[components.<name>]`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::routing::{Route, StaticRouteTable};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod components;
mod logging;
mod search;
mod serialization;
mod theme;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use components::{ComponentConfig, ComponentOptions, OptionsMap, LIBRARY_DEFAULTS};
pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use search::{FileSearch, SearchConfig};
pub use theme::{FileTheme, ThemeConfig, ThemeMode};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overrides
pub const ENV_BIND: &str = "STRAPKIT_BIND";
pub const ENV_PROJECT_DIR: &str = "STRAPKIT_PROJECT_DIR";
pub const ENV_CONFIG: &str = "STRAPKIT_CONFIG";

const DEFAULT_BIND: &str = "127.0.0.1:8686";

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8686))
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP API binds to
    pub bind_addr: SocketAddr,

    /// Project root; documentation for the search index is read below it
    pub project_dir: PathBuf,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Search index settings
    pub search: SearchConfig,

    /// Document-level theme
    pub theme: ThemeConfig,

    /// Library defaults merged with user component tables
    pub components: ComponentConfig,

    /// Static route table used by breadcrumbs and search
    pub routes: Vec<Route>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            project_dir: PathBuf::from("."),
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
            theme: ThemeConfig::default(),
            components: ComponentConfig::library_defaults(),
            routes: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub project_dir: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [search] section
    pub search: Option<FileSearch>,

    /// Optional [theme] section
    pub theme: Option<FileTheme>,

    /// Optional [components.X] sections
    #[serde(default)]
    pub components: BTreeMap<String, OptionsMap>,

    /// Optional [[routes]] entries
    #[serde(default)]
    pub routes: Vec<Route>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: `$STRAPKIT_CONFIG`, else ~/.config/strapkit/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(ENV_CONFIG).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|p| p.join(".config").join("strapkit").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Err(e) = Self::write_template(&path) {
            tracing::debug!("Could not write config template: {:#}", e);
        }
    }

    /// Write `Config::default().to_toml()` to `path`, creating parent directories
    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Read and parse the config file; a missing file is an empty config
    ///
    /// A file that exists but cannot be read or parsed is an error. A broken
    /// config should fail loudly, not fall back to defaults while the user
    /// debugs the wrong thing.
    fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
        let Some(path) = path else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).with_context(|| {
                format!(
                    "Failed to parse configuration file {}\n\
                     Check for missing quotes, invalid booleans or typos in section names.\n\
                     To reset, run `strapkit config --reset`.",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read configuration file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let file = Self::load_file_config(path.as_deref())?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Parse a config document without consulting the environment
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(s).context("parsing configuration")?;
        Self::resolve(file, |_| None)
    }

    /// Combine the file layer with environment overrides
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Bind address: env > file > default
        let bind = env(ENV_BIND)
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", bind))?;

        // Project directory: env > file > default
        let project_dir = env(ENV_PROJECT_DIR)
            .or(file.project_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let logging = LoggingConfig::from_file(file.logging);
        let search = SearchConfig::from_file(file.search);
        let theme = ThemeConfig::from_file(file.theme);
        let components = ComponentConfig::library_defaults().with_overrides(file.components);

        Ok(Self {
            bind_addr,
            project_dir,
            logging,
            search,
            theme,
            components,
            routes: file.routes,
        })
    }

    /// Route table built from `[[routes]]`
    pub fn route_table(&self) -> StaticRouteTable {
        StaticRouteTable::new(self.routes.clone())
    }
}

//! Search index configuration

use serde::Deserialize;

use crate::search::SearchEntry;

/// Search index settings
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Result count when the caller gives no limit
    pub default_limit: usize,
    /// Upper bound for caller-supplied limits
    pub max_limit: usize,
    /// Route name prefixes that mark API endpoints
    pub api_prefixes: Vec<String>,
    /// Route names kept out of the index; a trailing `*` matches by prefix
    pub ignore_routes: Vec<String>,
    /// Markdown directory below the project root
    pub docs_dir: String,
    /// URL prefix for documentation pages
    pub docs_url_prefix: String,
    /// Extra entries from `[[search.entries]]`
    pub entries: Vec<SearchEntry>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 50,
            api_prefixes: vec!["api_".to_string()],
            ignore_routes: Vec::new(),
            docs_dir: "docs".to_string(),
            docs_url_prefix: "/docs/".to_string(),
            entries: Vec::new(),
        }
    }
}

/// Search settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSearch {
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
    pub api_prefixes: Option<Vec<String>>,
    pub ignore_routes: Option<Vec<String>>,
    pub docs_dir: Option<String>,
    pub docs_url_prefix: Option<String>,
    #[serde(default)]
    pub entries: Vec<SearchEntry>,
}

impl SearchConfig {
    pub fn from_file(file: Option<FileSearch>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let default_limit = file.default_limit.unwrap_or(defaults.default_limit);
        let max_limit = file.max_limit.unwrap_or(defaults.max_limit);
        if default_limit > max_limit {
            tracing::warn!(
                "search.default_limit ({}) exceeds search.max_limit ({})",
                default_limit,
                max_limit
            );
        }

        Self {
            default_limit,
            max_limit,
            api_prefixes: file.api_prefixes.unwrap_or(defaults.api_prefixes),
            ignore_routes: file.ignore_routes.unwrap_or(defaults.ignore_routes),
            docs_dir: file.docs_dir.unwrap_or(defaults.docs_dir),
            docs_url_prefix: file.docs_url_prefix.unwrap_or(defaults.docs_url_prefix),
            entries: file.entries,
        }
    }

    /// Effective limit for a request: default when absent, capped at `max_limit`
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|&n| n > 0)
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

//! Search index data types

use serde::{Deserialize, Serialize};

/// One indexed document
///
/// `keywords` and `content` only feed scoring; they never leave the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchEntry {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Category tag (`page`, `documentation`, first path segment, ...)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

/// Public view of a matched entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&SearchEntry> for SearchResult {
    fn from(entry: &SearchEntry) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            url: entry.url.clone(),
            kind: entry.kind.clone(),
        }
    }
}

/// Response body for `GET /api/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            query: query.into(),
            total: results.len(),
            results,
        }
    }
}

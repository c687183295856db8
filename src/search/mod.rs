//! Site search over the route table
//!
//! The index is assembled on the first query and cached for the lifetime of
//! the service: one entry per eligible route, then configured extra entries,
//! then markdown documentation under the project root. Matching is a simple
//! additive score over title, keywords, description and content.

mod docs;
mod index;
mod types;

pub use docs::{doc_entries, summarize, MarkdownSummary};
pub use index::{entry_for_route, is_excluded, route_entries, score};
pub use types::{SearchEntry, SearchResponse, SearchResult};

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::SearchConfig;
use crate::routing::RouteTable;

pub struct SearchService<R: RouteTable> {
    root: PathBuf,
    routes: R,
    config: SearchConfig,
    index: OnceLock<Vec<SearchEntry>>,
}

impl<R: RouteTable> SearchService<R> {
    pub fn new(root: impl Into<PathBuf>, routes: R, config: SearchConfig) -> Self {
        Self {
            root: root.into(),
            routes,
            config,
            index: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Indexed entries, building them on first access
    pub fn index(&self) -> &[SearchEntry] {
        self.index.get_or_init(|| self.build())
    }

    fn build(&self) -> Vec<SearchEntry> {
        let mut entries = route_entries(&self.routes, &self.config);
        let from_routes = entries.len();

        entries.extend(self.config.entries.iter().cloned());

        let docs_dir = self.root.join(&self.config.docs_dir);
        let docs = doc_entries(&docs_dir, &self.config.docs_url_prefix);
        let from_docs = docs.len();
        entries.extend(docs);

        tracing::info!(
            routes = from_routes,
            configured = self.config.entries.len(),
            docs = from_docs,
            "Search index built with {} entries",
            entries.len()
        );
        entries
    }

    /// Ranked matches for `query`, at most `limit` (default and cap from config)
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let terms: Vec<&str> = query.split_whitespace().collect();
        let limit = self.config.clamp_limit(limit);

        let mut scored: Vec<(u32, &SearchEntry)> = self
            .index()
            .iter()
            .map(|entry| (score(entry, &query, &terms), entry))
            .filter(|(score, _)| *score > 0)
            .collect();
        // Stable: equal scores keep index order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, entry)| SearchResult::from(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Route, StaticRouteTable};

    fn service() -> SearchService<StaticRouteTable> {
        let mut shop = Route::new("app_shop", "/shop");
        shop.description = Some("Browse products".to_string());
        let mut test_page = Route::new("app_test", "/test");
        test_page.keywords = vec!["testing".to_string()];

        let table = StaticRouteTable::new(vec![
            Route::new("app_home", "/"),
            shop,
            Route::new("app_shop_cart", "/shop/cart"),
            Route::new("api_products", "/api/products"),
            Route::new("_wdt", "/_wdt/{token}"),
            Route::new("admin_products", "/admin/products"),
            test_page,
            Route::new("app_test_results", "/test/results"),
        ]);
        let mut config = SearchConfig::default();
        config.ignore_routes = vec!["admin_*".to_string()];
        config.entries = vec![SearchEntry {
            title: "Shipping policy".to_string(),
            url: "/shipping".to_string(),
            kind: "page".to_string(),
            ..Default::default()
        }];
        SearchService::new("/nonexistent-root", table, config)
    }

    #[test]
    fn test_index_is_lazy() {
        let service = service();
        assert!(!service.is_built());
        service.search("shop", None);
        assert!(service.is_built());
        let titles: Vec<_> = service.index().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["App Home", "Shop", "Cart", "Test", "Results", "Shipping policy"]
        );
    }

    #[test]
    fn test_ranking_and_exclusions() {
        let service = service();
        let results = service.search("shop", None);
        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        // Title match outranks a keyword match
        assert_eq!(urls, vec!["/shop", "/shop/cart"]);
        assert!(results
            .iter()
            .all(|r| !r.url.starts_with("/api") && !r.url.starts_with("/admin")));
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let service = service();
        assert!(service.search("", None).is_empty());
        assert!(service.search("   \t", None).is_empty());
    }

    #[test]
    fn test_case_insensitive_and_deterministic() {
        let service = service();
        let lower = service.search("test", None);
        assert_eq!(lower.len(), service.search("TEST", None).len());
        assert_eq!(lower.len(), service.search("TeSt", None).len());
        assert_eq!(lower, service.search("test", None));
        assert_eq!(lower[0].url, "/test");
    }

    #[test]
    fn test_limit_truncates() {
        let service = service();
        assert_eq!(service.search("test", Some(1)).len(), 1);
        assert_eq!(service.search("test", Some(0)).len(), 2);
    }

    #[test]
    fn test_odd_input_is_harmless() {
        let service = service();
        assert!(service.search("[(*?\\", None).is_empty());
        assert!(service.search("ü ∑ 🎉", Some(3)).is_empty());
    }

    #[test]
    fn test_results_expose_public_fields_only() {
        let service = service();
        let results = service.search("shop", Some(1));
        let json = serde_json::to_value(&results[0]).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["title", "description", "url", "type"]);
    }
}

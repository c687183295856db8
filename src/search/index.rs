//! Route-derived entries and relevance scoring

use std::collections::HashMap;

use super::types::SearchEntry;
use crate::config::SearchConfig;
use crate::routing::{is_parameter, Route, RouteTable};
use crate::util::humanize;

// ─────────────────────────────────────────────────────────────────────────────
// Weights
// ─────────────────────────────────────────────────────────────────────────────

const TITLE_EXACT: u32 = 20;
const TITLE_CONTAINS: u32 = 10;
const KEYWORD_EXACT: u32 = 5;
const KEYWORD_CONTAINS: u32 = 3;
const DESCRIPTION_CONTAINS: u32 = 2;
const CONTENT_CONTAINS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Exclusion
// ─────────────────────────────────────────────────────────────────────────────

/// Internal, API and ignored routes stay out of the index
pub fn is_excluded(route: &Route, config: &SearchConfig) -> bool {
    let name = route.name.as_str();
    if name.starts_with('_') {
        return true;
    }
    if config
        .api_prefixes
        .iter()
        .any(|prefix| !prefix.is_empty() && name.starts_with(prefix.as_str()))
    {
        return true;
    }
    if route.path == "/api" || route.path.starts_with("/api/") {
        return true;
    }
    config
        .ignore_routes
        .iter()
        .any(|pattern| match pattern.strip_suffix('*') {
            Some(prefix) => name.starts_with(prefix),
            None => name == pattern,
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry derivation
// ─────────────────────────────────────────────────────────────────────────────

fn static_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && !is_parameter(s))
        .collect()
}

/// Lowercased keyword list without duplicates, first occurrence kept
fn keywords_for(route: &Route, segments: &[&str]) -> Vec<String> {
    let name_tokens = route
        .name
        .split(|c: char| c == '_' || c == '-' || c == '.')
        .filter(|t| !t.is_empty());

    let mut keywords: Vec<String> = Vec::new();
    let candidates = route
        .keywords
        .iter()
        .map(String::as_str)
        .chain(name_tokens)
        .chain(segments.iter().copied());
    for candidate in candidates {
        let keyword = candidate.trim().to_lowercase();
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

/// Build the entry for one route; routes whose URL cannot be generated are skipped
pub fn entry_for_route(route: &Route, table: &dyn RouteTable) -> Option<SearchEntry> {
    let url = match table.generate(&route.name, &HashMap::new()) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Skipping route '{}' in search index: {}", route.name, e);
            return None;
        }
    };

    let segments = static_segments(&route.path);
    let title = route
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| segments.last().map(|s| humanize(s)))
        .unwrap_or_else(|| humanize(&route.name));
    let description = route.description.clone().unwrap_or_default();
    let kind = route
        .kind
        .clone()
        .filter(|k| !k.is_empty())
        .or_else(|| segments.first().map(|s| s.to_string()))
        .unwrap_or_else(|| "page".to_string());
    let keywords = keywords_for(route, &segments);
    let content = format!("{} {}", description, route.path).trim().to_string();

    Some(SearchEntry {
        title,
        description,
        url,
        kind,
        keywords,
        content,
    })
}

/// Entries for every eligible route, in table order
pub fn route_entries(table: &dyn RouteTable, config: &SearchConfig) -> Vec<SearchEntry> {
    table
        .routes()
        .iter()
        .filter(|route| {
            let excluded = is_excluded(route, config);
            if excluded {
                tracing::trace!("Route '{}' excluded from search", route.name);
            }
            !excluded
        })
        .filter_map(|route| entry_for_route(route, table))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Additive relevance of `entry` for a normalized (trimmed, lowercased) query
pub fn score(entry: &SearchEntry, query: &str, terms: &[&str]) -> u32 {
    let title = entry.title.to_lowercase();
    let description = entry.description.to_lowercase();
    let content = entry.content.to_lowercase();
    let keywords: Vec<String> = entry.keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut total = 0;
    if title == query {
        total += TITLE_EXACT;
    }
    for term in terms {
        if title.contains(term) {
            total += TITLE_CONTAINS;
        }
        if keywords.iter().any(|k| k == term) {
            total += KEYWORD_EXACT;
        } else if keywords.iter().any(|k| k.contains(term)) {
            total += KEYWORD_CONTAINS;
        }
        if description.contains(term) {
            total += DESCRIPTION_CONTAINS;
        }
        if content.contains(term) {
            total += CONTENT_CONTAINS;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::StaticRouteTable;

    fn route(name: &str, path: &str) -> Route {
        Route::new(name, path)
    }

    #[test]
    fn test_exclusions() {
        let mut config = SearchConfig::default();
        config.ignore_routes = vec!["admin_*".to_string(), "app_login".to_string()];

        assert!(is_excluded(&route("_profiler", "/_profiler"), &config));
        assert!(is_excluded(&route("api_users", "/users"), &config));
        assert!(is_excluded(&route("users_json", "/api/users"), &config));
        assert!(is_excluded(&route("admin_dashboard", "/admin"), &config));
        assert!(is_excluded(&route("app_login", "/login"), &config));
        assert!(!is_excluded(&route("app_login_check", "/login/check"), &config));
        assert!(!is_excluded(&route("app_apiary", "/apiary"), &config));
    }

    #[test]
    fn test_entry_derivation() {
        let table = StaticRouteTable::new(vec![route("app_order_history", "/account/order-history")]);
        let entry = entry_for_route(&table.routes()[0], &table).unwrap();
        assert_eq!(entry.title, "Order History");
        assert_eq!(entry.url, "/account/order-history");
        assert_eq!(entry.kind, "account");
        assert_eq!(
            entry.keywords,
            vec!["app", "order", "history", "account", "order-history"]
        );
        assert_eq!(entry.content, "/account/order-history");
    }

    #[test]
    fn test_route_metadata_wins() {
        let mut r = route("app_home", "/");
        r.title = Some("Welcome".to_string());
        r.description = Some("Start here".to_string());
        r.kind = Some("landing".to_string());
        r.keywords = vec!["Intro".to_string()];
        let table = StaticRouteTable::new(vec![r]);
        let entry = entry_for_route(&table.routes()[0], &table).unwrap();
        assert_eq!(entry.title, "Welcome");
        assert_eq!(entry.kind, "landing");
        assert_eq!(entry.keywords[0], "intro");
        assert_eq!(entry.content, "Start here /");
    }

    #[test]
    fn test_root_route_falls_back_to_name() {
        let table = StaticRouteTable::new(vec![route("app_home", "/")]);
        let entry = entry_for_route(&table.routes()[0], &table).unwrap();
        assert_eq!(entry.title, "App Home");
        assert_eq!(entry.kind, "page");
    }

    #[test]
    fn test_parameterized_routes_are_skipped() {
        let table = StaticRouteTable::new(vec![
            route("app_shop", "/shop"),
            route("app_shop_show", "/shop/{id}"),
        ]);
        let entries = route_entries(&table, &SearchConfig::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Shop");
    }

    #[test]
    fn test_score_weights() {
        let entry = SearchEntry {
            title: "Shop".to_string(),
            description: "Browse the shop".to_string(),
            url: "/shop".to_string(),
            kind: "shop".to_string(),
            keywords: vec!["shop".to_string(), "shopping".to_string()],
            content: "Browse the shop /shop".to_string(),
        };
        // exact title 20 + title 10 + keyword exact 5 + description 2 + content 1
        assert_eq!(score(&entry, "shop", &["shop"]), 38);
        // keyword contains 3 only
        assert_eq!(score(&entry, "shopp", &["shopp"]), 3);
        assert_eq!(score(&entry, "cart", &["cart"]), 0);
    }
}

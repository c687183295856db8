//! Route table abstraction
//!
//! Breadcrumbs and the search index introspect the host application's
//! routes. The host provides them through [`RouteTable`]; the bundled
//! [`StaticRouteTable`] is filled from `[[routes]]` in the config file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One registered route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Route name (e.g. `app_shop_edit`)
    pub name: String,
    /// Path template with `{param}` placeholders (e.g. `/shop/{id}/edit`)
    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    /// Category tag used by the search index
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Route {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Names of the `{param}` placeholders in the path
    pub fn parameters(&self) -> Vec<&str> {
        self.path
            .split('/')
            .filter_map(parameter_name)
            .collect()
    }
}

/// `{id}` -> `Some("id")`
pub fn parameter_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|s| !s.is_empty())
}

pub fn is_parameter(segment: &str) -> bool {
    parameter_name(segment).is_some()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route registered under this name
    NotFound(String),
    /// The path needs parameters that were not supplied
    MissingParameters { route: String, missing: Vec<String> },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "Route '{}' does not exist", name),
            Self::MissingParameters { route, missing } => write!(
                f,
                "Route '{}' is missing required parameters: {}",
                route,
                missing.join(", ")
            ),
        }
    }
}

impl std::error::Error for RouteError {}

/// Read access to the host's routes plus URL generation
pub trait RouteTable: Send + Sync {
    fn routes(&self) -> &[Route];

    fn find(&self, name: &str) -> Option<&Route> {
        self.routes().iter().find(|r| r.name == name)
    }

    /// Build a URL for a named route by filling its placeholders
    fn generate(&self, name: &str, params: &HashMap<String, String>) -> Result<String, RouteError> {
        let route = self
            .find(name)
            .ok_or_else(|| RouteError::NotFound(name.to_string()))?;

        let mut missing = Vec::new();
        let segments: Vec<String> = route
            .path
            .split('/')
            .map(|segment| match parameter_name(segment) {
                Some(param) => match params.get(param) {
                    Some(value) => value.clone(),
                    None => {
                        missing.push(param.to_string());
                        String::new()
                    }
                },
                None => segment.to_string(),
            })
            .collect();

        if !missing.is_empty() {
            return Err(RouteError::MissingParameters {
                route: name.to_string(),
                missing,
            });
        }

        let path = segments.join("/");
        Ok(if path.is_empty() { "/".to_string() } else { path })
    }
}

/// In-memory route table
#[derive(Debug, Clone, Default)]
pub struct StaticRouteTable {
    routes: Vec<Route>,
}

impl StaticRouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }
}

impl RouteTable for StaticRouteTable {
    fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// What the current request matched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Matched route name, if any
    pub route: Option<String>,
    /// Request path (e.g. `/shop/42/edit`)
    pub path: String,
}

impl RequestContext {
    pub fn new(route: Option<&str>, path: impl Into<String>) -> Self {
        Self {
            route: route.map(String::from),
            path: path.into(),
        }
    }
}

// HTTP API handlers
//
// All endpoints return JSON and are designed for local consumption only.
// Security: Binds to 127.0.0.1 by default (localhost only).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppState;
use crate::components::{self, ComponentError, MountContext, RenderOptions};
use crate::routing::RequestContext;
use crate::search::SearchResponse;

/// API error responses
/// Converted to HTTP status codes via IntoResponse
#[derive(Debug)]
pub enum ApiError {
    Internal(String),
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        tracing::error!("API error: {} - {}", status, message);

        (status, message).into_response()
    }
}

impl From<ComponentError> for ApiError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::Unknown(_) => ApiError::NotFound(err.to_string()),
            ComponentError::InvalidProps { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Query string for GET /api/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Max results (default and cap from `[search]`)
    pub limit: Option<usize>,
}

/// GET /api/search - Ranked matches from the route/documentation index
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    // The first query builds the index, which reads the docs directory
    let service = state.search.clone();
    let query = params.q.clone();
    let results = tokio::task::spawn_blocking(move || service.search(&query, params.limit))
        .await
        .map_err(|e| ApiError::Internal(format!("Search task failed: {}", e)))?;

    Ok(Json(SearchResponse::new(params.q, results)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Components
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/components - Names accepted by the render endpoint
pub async fn list_components() -> Json<Vec<&'static str>> {
    Json(components::names().to_vec())
}

/// Optional request context for route-aware components (breadcrumbs)
#[derive(Debug, Default, Deserialize)]
pub struct RenderParams {
    /// Matched route name
    pub route: Option<String>,
    /// Request path
    pub path: Option<String>,
}

impl RenderParams {
    fn request(&self) -> Option<RequestContext> {
        if self.route.is_none() && self.path.is_none() {
            return None;
        }
        Some(RequestContext::new(
            self.route.as_deref(),
            self.path.clone().unwrap_or_else(|| "/".to_string()),
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub component: String,
    pub options: RenderOptions,
    /// Root element attributes, rendered
    pub attributes: String,
}

/// POST /api/components/:name - Resolve props and derive render options
pub async fn render_component(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RenderParams>,
    Json(props): Json<Value>,
) -> Result<Json<RenderResponse>, ApiError> {
    if !(props.is_object() || props.is_null()) {
        return Err(ApiError::BadRequest(
            "Props must be a JSON object".to_string(),
        ));
    }

    let request = params.request();
    let mut ctx = MountContext::new(&state.components, state.ids.as_ref())
        .with_router(state.routes.as_ref());
    if let Some(request) = &request {
        ctx = ctx.with_request(request);
    }

    let options = components::render(&name, props, &ctx)?;
    let attributes = options.attributes("attrs").render();
    tracing::debug!(component = %name, "Rendered component");

    Ok(Json(RenderResponse {
        component: name,
        options,
        attributes,
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub attributes: String,
}

/// GET /api/theme - Attribute string for the `<html>` element
pub async fn theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        attributes: state.theme.html_attributes().to_string(),
    })
}

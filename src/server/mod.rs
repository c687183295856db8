//! Local HTTP API
//!
//! Exposes search, component rendering and the theme helper as JSON
//! endpoints for tooling and template hosts in other languages.

mod api;

pub use api::{ApiError, RenderParams, RenderResponse, SearchParams, ThemeResponse};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::components::RandomIdGenerator;
use crate::config::{ComponentConfig, Config};
use crate::routing::StaticRouteTable;
use crate::search::SearchService;
use crate::theme::ThemeRuntime;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService<StaticRouteTable>>,
    pub components: Arc<ComponentConfig>,
    pub routes: Arc<StaticRouteTable>,
    pub theme: Arc<ThemeRuntime>,
    pub ids: Arc<RandomIdGenerator>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            search: Arc::new(SearchService::new(
                config.project_dir.clone(),
                config.route_table(),
                config.search.clone(),
            )),
            components: Arc::new(config.components.clone()),
            routes: Arc::new(config.route_table()),
            theme: Arc::new(ThemeRuntime::new(&config.theme)),
            ids: Arc::new(RandomIdGenerator::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(api::search))
        .route("/api/components", get(api::list_components))
        .route("/api/components/:name", post(api::render_component))
        .route("/api/theme", get(api::theme))
        .with_state(state)
}

/// Run the API until the shutdown future resolves
pub async fn serve(
    bind_addr: SocketAddr,
    state: AppState,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("API server shut down gracefully");
    Ok(())
}

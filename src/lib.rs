//! instance-info library - metadata retrieval core and HTTP surface
//!
//! Queries the local GCE metadata server for instance identity and network
//! facts and republishes them as an HTML dashboard, a JSON document, and a
//! health probe.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod metadata;

use metadata::MetadataClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the instance metadata server
    pub metadata: MetadataClient,
}

impl AppState {
    /// Create new application state
    pub fn new(metadata: MetadataClient) -> Self {
        Self { metadata }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_dashboard))
        .route("/json", get(api::metadata_json))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

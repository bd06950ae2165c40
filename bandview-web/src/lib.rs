//! bandview-web library - HTTP service for the artist catalog
//!
//! Serves the browsing UI, the filterable JSON listing, artist detail,
//! and the catalog export.

use std::sync::Arc;

use axum::Router;
use bandview_common::Catalog;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod upstream;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Joined artist catalog (read-only after startup)
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // JSON API routes
    let api = Router::new()
        .route("/api/artists", get(api::list_artists))
        .route("/api/artists/:id", get(api::get_artist))
        .route("/api/export", get(api::export_catalog));

    // Embedded UI routes
    let ui = Router::new()
        .route("/", get(api::serve_index))
        .route("/artist", get(api::serve_artist_page))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/artist.js", get(api::serve_artist_js))
        .route("/static/style.css", get(api::serve_style_css));

    Router::new()
        .merge(api)
        .merge(ui)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Catalog export endpoint

use axum::{extract::State, Json};
use bandview_common::Artist;

use crate::AppState;

/// GET /api/export
///
/// Full unfiltered catalog as a JSON array, for machine consumption.
pub async fn export_catalog(State(state): State<AppState>) -> Json<Vec<Artist>> {
    Json(state.catalog.artists().to_vec())
}

//! Artist listing and detail endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bandview_common::{Artist, Criteria};
use serde::Serialize;
use serde_json::json;

use crate::AppState;

/// Listing response with results and the echoed search string
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub search_query: String,
    pub total_results: usize,
    pub artists: Vec<Artist>,
}

/// GET /api/artists
///
/// Filterable artist listing. Every supplied criterion must hold; a
/// bare query returns the whole catalog in order. The parameter bag
/// may repeat `members`.
pub async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<ListResponse> {
    let criteria = Criteria::from_params(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let search_query = criteria.name_contains.clone().unwrap_or_default();

    let artists: Vec<Artist> = state
        .catalog
        .filter(&criteria)
        .into_iter()
        .cloned()
        .collect();

    Json(ListResponse {
        search_query,
        total_results: artists.len(),
        artists,
    })
}

/// GET /api/artists/:id
///
/// One artist by id. The path segment must parse as the artist's
/// integer id; anything else is a plain not-found.
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Artist>, ArtistError> {
    state
        .catalog
        .find_by_param(&id)
        .cloned()
        .map(Json)
        .ok_or(ArtistError::NotFound(id))
}

/// Artist endpoint errors
#[derive(Debug)]
pub enum ArtistError {
    NotFound(String),
}

impl IntoResponse for ArtistError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ArtistError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("No artist with id {}", id))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

//! UI serving routes
//!
//! Serves the embedded HTML/JS/CSS for the artist browser

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const ARTIST_HTML: &str = include_str!("../ui/artist.html");
const APP_JS: &str = include_str!("../ui/app.js");
const ARTIST_JS: &str = include_str!("../ui/artist.js");
const STYLE_CSS: &str = include_str!("../ui/style.css");

/// GET /
///
/// Serves the listing page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /artist
///
/// Serves the detail page shell; the page script reads the artist id
/// from the query string
pub async fn serve_artist_page() -> Html<&'static str> {
    Html(ARTIST_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/artist.js
pub async fn serve_artist_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        ARTIST_JS,
    )
        .into_response()
}

/// GET /static/style.css
pub async fn serve_style_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLE_CSS).into_response()
}

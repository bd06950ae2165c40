//! HTTP API handlers for bandview-web

pub mod artists;
pub mod export;
pub mod health;
pub mod ui;

pub use artists::{get_artist, list_artists};
pub use export::export_catalog;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_artist_js, serve_artist_page, serve_index, serve_style_css};

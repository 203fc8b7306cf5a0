//! API route configuration.

use crate::api::handlers::{list_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener routes.
///
/// # Endpoints
///
/// - `POST /shorten_url`            - Create a mapping (`?short_url=` to pick the code)
/// - `GET  /list_urls`              - List all mappings
/// - `GET  /redirect/{short_url}`   - Redirect to the original URL
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten_url", post(shorten_handler))
        .route("/list_urls", get(list_handler))
        .route("/redirect/{short_url}", get(redirect_handler))
}

//! Handler for listing stored mappings.

use axum::{Json, extract::State};

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored mapping in no particular order.
///
/// # Endpoint
///
/// `GET /list_urls`
///
/// # Response
///
/// ```json
/// [
///   { "short_code": "tiny2", "original_url": "https://www.example.com" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 404 with `"No URLs available."` when nothing has been stored yet.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<UrlRecord>>, AppError> {
    let records = state.link_service.list_links().await?;

    Ok(Json(records))
}

//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /redirect/{short_url}`
///
/// Answers `302 Found` with a `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.link_service.get_link_by_code(&code).await?;

    let location = HeaderValue::try_from(record.original_url.as_str())
        .map_err(|e| AppError::internal(format!("stored URL is not a valid header: {e}")))?;

    debug!(short_code = %code, location = %record.original_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

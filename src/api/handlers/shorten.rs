//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::api::dto::shorten::{ShortenQuery, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, optionally under a caller-chosen code.
///
/// # Endpoint
///
/// `POST /shorten_url?short_url={code}`
///
/// # Request Flow
///
/// 1. Validate the URL syntax (no network access on failure)
/// 2. Probe the URL once; it must answer with a status in `[200, 400)`
/// 3. Store the mapping under the requested or a generated code
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_code": "aZ3_k9-Q" }
/// ```
///
/// # Errors
///
/// - 400 if the URL lacks an `http`/`https` scheme or is unreachable
/// - 404 if the URL answered with a status below 200
/// - 404 if the requested code already exists
/// - 415 if the body is not sent as `application/json`
/// - 400 if the body is not valid JSON, 422 if its fields do not match
pub async fn shorten_handler(
    State(state): State<AppState>,
    query: Result<Query<ShortenQuery>, QueryRejection>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Query(query) = query?;
    let Json(payload) = payload?;

    state.url_validator.validate(&payload.original_url).await?;

    let record = state
        .link_service
        .create_short_link(payload.original_url, query.short_url)
        .await?;

    Ok(Json(ShortenResponse {
        short_code: record.short_code,
    }))
}

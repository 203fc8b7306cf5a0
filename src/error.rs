//! Application error type and its HTTP representation.
//!
//! Every failure the service reports to a client is an [`AppError`]. The
//! `Display` text of each variant is the exact `detail` string returned to
//! callers, so existing consumers can match on it.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors produced by the validator, the mapping store, or the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The candidate URL does not parse or lacks an `http`/`https` scheme.
    #[error("Value must start 'http://' or 'https://'")]
    MalformedUrl,

    /// The reachability probe failed or returned a status outside `[200, 400)`.
    ///
    /// `status` is `None` when the request never produced a response.
    #[error("Invalid URL")]
    UnreachableUrl { status: Option<u16> },

    /// A requested short code is already mapped.
    #[error("Short URL '{0}' already exists.")]
    CodeTaken(String),

    /// The store holds no records.
    #[error("No URLs available.")]
    Empty,

    /// No record exists for the short code.
    #[error("No URL found for '{0}' short url provided.")]
    NotFound(String),

    /// Code generation collided on every attempt.
    #[error("Failed to generate a unique short code")]
    CodeSpaceExhausted { attempts: usize },

    /// The request body or query was rejected by an extractor.
    ///
    /// `status` is the one the extractor chose: 415 for a missing JSON
    /// content type, 400 for broken syntax, 422 for mismatched fields.
    #[error("{detail}")]
    InvalidRequest { status: StatusCode, detail: String },

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// HTTP status reported for this error.
    ///
    /// `CodeTaken` and `Empty` answer 404 to stay compatible with existing
    /// clients, even though neither is a lookup miss.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedUrl => StatusCode::BAD_REQUEST,
            AppError::UnreachableUrl { status: Some(s) } if *s < 200 => StatusCode::NOT_FOUND,
            AppError::UnreachableUrl { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeTaken(_) | AppError::Empty | AppError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::InvalidRequest { status, .. } => *status,
            AppError::CodeSpaceExhausted { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MalformedUrl => "malformed_url",
            AppError::UnreachableUrl { .. } => "unreachable_url",
            AppError::CodeTaken(_) => "code_taken",
            AppError::Empty => "empty",
            AppError::NotFound(_) => "not_found",
            AppError::CodeSpaceExhausted { .. } => "code_space_exhausted",
            AppError::InvalidRequest { .. } => "invalid_request",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Internal(reason) => {
                tracing::error!(kind = self.kind(), reason = %reason, "Request failed");
            }
            AppError::CodeSpaceExhausted { attempts } => {
                tracing::error!(kind = self.kind(), attempts = *attempts, "Request failed");
            }
            _ => tracing::debug!(kind = self.kind(), status = status.as_u16(), "Request rejected"),
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

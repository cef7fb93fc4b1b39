//! Error types for moodboard-server
//!
//! [`ApiError`] is what HTTP handlers return; [`TransientSkip`] is what an
//! update tick yields when it produces no song.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client omitted a required parameter (400)
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Third-party lookup failed (500)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<moodboard_common::Error> for ApiError {
    fn from(err: moodboard_common::Error) -> Self {
        match err {
            moodboard_common::Error::Upstream(msg) => ApiError::Upstream(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::MissingInput(msg) => (StatusCode::BAD_REQUEST, "MISSING_INPUT", msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Why an update tick produced no song
///
/// Logged by the update loop, never propagated.
#[derive(Debug, Error)]
pub enum TransientSkip {
    /// Lookup succeeded but nothing is actively playing
    #[error("nothing playing")]
    NothingPlaying,

    /// Lookup failed
    #[error("lookup failed: {0}")]
    Lookup(#[from] moodboard_common::Error),
}

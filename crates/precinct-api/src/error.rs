//! Error types for the REST API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Store
//! errors map onto HTTP status codes here: absent identifiers become 404,
//! rejected verification flows become 400, and everything unexpected
//! becomes 500 with a JSON `{message}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use precinct_store::StoreError;

/// Errors that can occur in the REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request was well-formed JSON but semantically invalid
    /// (out-of-range value, code mismatch, unverified channel).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            Self::InvalidRequest(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "message": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

//! HTTP error responses.
//!
//! Library errors map onto status codes as follows, and every error body is
//! `{"error": "<message>"}`.
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | Translation | 400 |
//! | Duplicate | 409 |
//! | SemanticConflict | 422 |
//! | NotFound | 404 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::error::StrindexError;

#[derive(Debug, Error)]
pub enum RestError {
    /// Malformed request (HTTP 400).
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Identity already taken (HTTP 409).
    #[error("{0}")]
    Conflict(String),

    /// Well-formed but semantically unusable request (HTTP 422).
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Internal server error (HTTP 500).
    #[error("{0}")]
    Internal(String),
}

pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    fn status(&self) -> StatusCode {
        match self {
            RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Conflict(_) => StatusCode::CONFLICT,
            RestError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<StrindexError> for RestError {
    fn from(err: StrindexError) -> Self {
        match err {
            StrindexError::Validation(message) => RestError::BadRequest(message),
            StrindexError::Duplicate(_) => RestError::Conflict(err.to_string()),
            StrindexError::Translation(e) => RestError::BadRequest(format!(
                "Unable to parse natural language query: {}",
                e
            )),
            StrindexError::SemanticConflict(message) => {
                RestError::UnprocessableEntity(format!("Conflicting filters detected: {}", message))
            }
            StrindexError::NotFound(_) => RestError::NotFound("String not found.".to_string()),
        }
    }
}

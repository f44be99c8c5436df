//! Application-level error types.
//!
//! Handlers convert workflow and client errors into `AppError`, which maps
//! onto HTTP responses with a JSON error body. The two user-facing error
//! kinds are validation errors (bad or missing input, no remote call made)
//! and remote failures (any synthesis/upload/resolution rejection).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::workflow::WorkflowError;

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the HTTP API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input was rejected before any external call was made.
    #[error("{0}")]
    Validation(String),

    /// A generation request is already in flight.
    #[error("a generation request is already in flight")]
    Busy,

    /// The uploaded file is not an audio payload.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// An external collaborator rejected or failed a call.
    #[error("{0}")]
    Remote(String),

    /// Malformed request body or multipart payload.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Busy => StatusCode::CONFLICT,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Remote(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::EmptyPrompt => {
                Self::Validation("voice prompt must not be empty".to_string())
            }
            WorkflowError::Busy => Self::Busy,
            WorkflowError::UnsupportedMediaType(mime) => Self::UnsupportedMediaType(mime),
            WorkflowError::Synthesis(e) => Self::Remote(e.to_string()),
            WorkflowError::Storage(e) => Self::Remote(e.to_string()),
            WorkflowError::InvalidPlaybackUrl(e) => Self::Remote(e.to_string()),
        }
    }
}

use std::error::Error;
use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;

use crate::mindmap::ExternalRenderError;

/// Common result type for start-up and CLI operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Errors surfaced by the service and its handlers
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unsupported file type. Allowed types: {allowed}")]
    UnsupportedFileType { allowed: String },

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File too large. Maximum allowed size: {limit}")]
    FileTooLarge { limit: String },

    #[error(transparent)]
    Renderer(#[from] ExternalRenderError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ServiceError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequest"),
            Self::UnsupportedFileType { .. } => (StatusCode::BAD_REQUEST, "UnsupportedFileType"),
            Self::InvalidFileName(_) => (StatusCode::BAD_REQUEST, "InvalidFileName"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            Self::FileTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "FileTooLarge"),
            Self::Renderer(ExternalRenderError::Unavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "RendererUnavailable")
            }
            Self::Renderer(ExternalRenderError::TimedOut(_)) => {
                (StatusCode::GATEWAY_TIMEOUT, "RendererTimedOut")
            }
            Self::Renderer(_) => (StatusCode::BAD_GATEWAY, "RendererFailed"),
            Self::Config(_) | Self::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            error!("{}", self);
        }

        let body = Json(json!({
            "error": code,
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

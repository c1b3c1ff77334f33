//! Application error type mapping to HTTP status codes and `{ error }` bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use jarvis_types::chat::ErrorBody;
use jarvis_types::error::ChatError;

/// Message surfaced for every internal failure. Details stay in the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or empty required input. Reported verbatim, 400.
    Validation(String),
    /// Anything unexpected. Logged, reported generically, 500.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::MissingMessage => AppError::Validation(ChatError::MissingMessage.to_string()),
            ChatError::Internal(detail) => AppError::Internal(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Error in chat API");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

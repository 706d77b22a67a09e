//! Application error type mapping to HTTP status codes and envelope format.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use parley_types::error::RepositoryError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat metadata persistence failure.
    Repository(RepositoryError),
    /// Malformed or incomplete request.
    Validation(String),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

/// Bodies that are not JSON, lack a JSON content type, or have the wrong
/// field types still get the envelope instead of axum's plain-text reply.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    /// Error code and message placed in the envelope.
    fn code_and_message(&self) -> (&'static str, String) {
        match self {
            AppError::Repository(RepositoryError::Conflict(msg)) => ("CONFLICT", msg.clone()),
            AppError::Repository(e) => ("INTERNAL_ERROR", e.to_string()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = self.code_and_message();
        if code == "INTERNAL_ERROR" {
            tracing::error!(error = %message, "request failed");
        }
        ApiResponse::error(code, &message, Instant::now()).into_response()
    }
}

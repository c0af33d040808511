//! HTTP-facing error type and JSON error envelope.
//!
//! Every error leaves the service as
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::pagination::PaginationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input was rejected (422).
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn into_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<PaginationError> for AppError {
    fn from(err: PaginationError) -> Self {
        AppError::validation(err.requirement(), json!({ "parameter": err.parameter() }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.into_info(),
        };

        (status, Json(body)).into_response()
    }
}

//! Fallback for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Returns 404 with the standard error envelope.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

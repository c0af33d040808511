//! Handler for the liveness endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::status::StatusResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /status`
///
/// Always returns 200 once the server is listening; the user data set is
/// validated before the listener is bound, so there is nothing left to check.
///
/// # Response
///
/// ```json
/// { "status": "healthy", "timestamp": "2026-10-19T08:15:00.123456Z" }
/// ```
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

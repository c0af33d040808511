//! DTO for the status endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness response. `timestamp` is serialized as RFC 3339 UTC.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

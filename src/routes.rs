//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /status`      - Liveness check
//! - `GET /api/users/`  - Paginated user listing
//! - anything else      - 404 with the JSON error envelope
//!
//! Every route is wrapped in the request tracing layer.

use crate::api;
use crate::api::handlers::{fallback_handler, status_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .nest("/api", api::routes::routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

//! API route configuration.

use crate::api::handlers::list_users_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /users/` - Paginated user listing
/// - `GET /users`  - Same listing; clients use both spellings
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users_handler))
        .route("/users", get(list_users_handler))
}

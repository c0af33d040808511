//! Handler for the paginated user listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::pagination::PageParams;
use crate::api::dto::users::UserListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists users one page at a time, ordered by ascending id.
///
/// # Endpoint
///
/// `GET /api/users/` (also served without the trailing slash)
///
/// # Query Parameters
///
/// - `page` (optional): Page number, >= 1 (default: 1)
/// - `size` (optional): Items per page, 1-100 (default: 50)
///
/// # Response
///
/// ```json
/// { "items": [...], "total": 12, "page": 1, "size": 50, "pages": 1 }
/// ```
///
/// A page past the end returns `200` with empty `items`.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if `page` or `size` is not an integer or
/// is out of range. `details.parameter` names the first offending parameter.
pub async fn list_users_handler(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<UserListResponse>, AppError> {
    let Query(params) =
        query.map_err(|rejection| AppError::validation(rejection.body_text(), json!({})))?;

    let request = params.to_request().inspect_err(|err| {
        metrics::counter!("users_page_rejected_total", "parameter" => err.parameter())
            .increment(1);
        tracing::debug!(parameter = err.parameter(), "Rejected page request");
    })?;

    let page = state.user_service.list_users(request).await?;
    metrics::counter!("users_pages_served_total").increment(1);

    Ok(Json(page.into()))
}

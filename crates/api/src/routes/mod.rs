pub mod health;
pub mod post;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};

use crate::response::ErrorResponse;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts          list, create
/// /posts/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/posts", post::router())
}

/// Fallback for requests that match no route.
///
/// Carries no resource-specific detail and uses its own code, separate from
/// the `NOT_FOUND` returned when a post id does not exist.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "ROUTE_NOT_FOUND",
            "the requested resource could not be found",
        )),
    )
}

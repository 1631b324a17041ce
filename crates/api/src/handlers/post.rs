//! Handlers for the `/posts` resource.
//!
//! The `{id}` segment arrives as a raw string and is parsed here, so a
//! non-integer id (or one that does not decode to UTF-8) is reported as a
//! validation error rather than a routing failure. JSON bodies are extracted as `Result` and only inspected once
//! the handler needs them.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use blogpad_core::error::CoreError;
use blogpad_core::types::DbId;
use blogpad_db::models::post::{Post, PostDraft};
use blogpad_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, PostListResponse};
use crate::state::AppState;

/// Parse a raw `{id}` path segment into a post id.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "invalid post id '{raw}': expected an integer"
        )))
    })
}

/// GET /posts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<PostListResponse>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Json(PostListResponse { posts }))
}

/// POST /posts
///
/// Responds 200 with the stored post and a `Location` header pointing at it.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PostDraft>, JsonRejection>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<DataResponse<Post>>)> {
    let Json(input) = payload?;
    let post = PostRepo::create(&state.pool, &input).await?;

    tracing::info!(post_id = post.id, "Post created");

    let location = format!("/posts/{}", post.id);
    Ok((
        StatusCode::OK,
        [(LOCATION, location)],
        Json(DataResponse { data: post }),
    ))
}

/// GET /posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<DataResponse<Post>>> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;
    let post = PostRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: post }))
}

/// PUT /posts/{id}
///
/// Full replace: the post must already exist, and every mutable field is
/// overwritten from the body, with omitted fields becoming empty. The
/// lookup runs before the body is inspected, so a missing post is a 404
/// even when the body is malformed.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<PostDraft>, JsonRejection>,
) -> AppResult<Json<DataResponse<Post>>> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;
    let mut post = PostRepo::find_by_id(&state.pool, id).await?;

    let Json(input) = payload?;
    let updated_at = PostRepo::update(&state.pool, id, &input).await?;
    post.apply(input);
    post.updated_at = updated_at;

    tracing::info!(post_id = id, "Post updated");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;
    PostRepo::delete(&state.pool, id).await?;

    tracing::info!(post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}

//! Post CRUD handlers: list, create, get, update, delete.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    ListParams, PostDeletedResponse, PostListResponse, PostMutationResponse, PostRequest,
    PostResponse,
};
use crate::app_state::AppState;
use crate::domain::PostId;
use crate::error::{BoardError, ErrorResponse};
use crate::service::post_service::{CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};

/// `GET /posts` — List posts, ten per page.
///
/// # Errors
///
/// Returns [`BoardError`] on malformed query parameters or storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "Posts",
    summary = "List posts",
    description = "Returns one page of ten posts with running display numbers. A page past the end of the data is empty and carries a no-data message.",
    params(ListParams),
    responses(
        (status = 200, description = "One page of posts", body = PostListResponse),
        (status = 400, description = "Malformed query", body = ErrorResponse),
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, BoardError> {
    let Query(params) = params?;
    let listing = state
        .post_service
        .list_posts(params.page, params.order)
        .await?;

    Ok(Json(PostListResponse::from(listing)))
}

/// `POST /posts` — Create a post.
///
/// # Errors
///
/// Returns [`BoardError::ValidationFailed`] when a field is invalid or the
/// title is taken.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = "Posts",
    summary = "Create a post",
    description = "Validates title and info, rejects duplicate titles, and stores the post. Client-supplied ids and timestamps are ignored.",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostMutationResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BoardError> {
    let Json(req) = payload?;
    let post = state.post_service.create_post(req.as_draft()).await?;

    Ok((
        StatusCode::CREATED,
        Json(PostMutationResponse {
            message: CREATED_MESSAGE.to_string(),
            post: PostResponse::from(post),
        }),
    ))
}

/// `GET /posts/:id` — Get one post.
///
/// # Errors
///
/// Returns [`BoardError::PostNotFound`] if the post does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    tag = "Posts",
    summary = "Get a post",
    description = "Returns a single post including its timestamps.",
    params(
        ("id" = i64, Path, description = "Post id"),
    ),
    responses(
        (status = 200, description = "Post details", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    id: Result<Path<PostId>, PathRejection>,
) -> Result<impl IntoResponse, BoardError> {
    let Path(id) = id?;
    let post = state.post_service.get_post(id).await?;
    Ok(Json(PostResponse::from(post)))
}

/// `PUT /posts/:id` — Replace title and info of a post.
///
/// # Errors
///
/// Returns [`BoardError::PostNotFound`] if the post does not exist, or
/// [`BoardError::ValidationFailed`] if the new values are invalid.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    tag = "Posts",
    summary = "Update a post",
    description = "Validates and applies a new title and info. Keeping the post's current title is allowed.",
    params(
        ("id" = i64, Path, description = "Post id"),
    ),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostMutationResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    id: Result<Path<PostId>, PathRejection>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BoardError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let post = state.post_service.update_post(id, req.as_draft()).await?;

    Ok(Json(PostMutationResponse {
        message: UPDATED_MESSAGE.to_string(),
        post: PostResponse::from(post),
    }))
}

/// `DELETE /posts/:id` — Remove a post.
///
/// # Errors
///
/// Returns [`BoardError::PostNotFound`] if the post does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    tag = "Posts",
    summary = "Delete a post",
    description = "Permanently removes a post.",
    params(
        ("id" = i64, Path, description = "Post id"),
    ),
    responses(
        (status = 200, description = "Post deleted", body = PostDeletedResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    id: Result<Path<PostId>, PathRejection>,
) -> Result<impl IntoResponse, BoardError> {
    let Path(id) = id?;
    state.post_service.delete_post(id).await?;

    Ok(Json(PostDeletedResponse {
        message: DELETED_MESSAGE.to_string(),
        id,
    }))
}

/// Post management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}

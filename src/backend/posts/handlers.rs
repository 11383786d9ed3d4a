/**
 * Post Handlers
 *
 * CRUD handlers for blog posts.
 *
 * | Route                     | Gates             |
 * |---------------------------|-------------------|
 * | `GET /api/post`           | none              |
 * | `GET /api/post/{id}`      | none              |
 * | `POST /api/posts`         | auth              |
 * | `PUT /api/posts/{id}`     | auth, ownership   |
 * | `DELETE /api/posts/{id}`  | auth, ownership   |
 *
 * The author of a new post is always the authenticated caller. Updates and
 * deletes reach the store as writes conditioned on the caller's id, so if
 * the post vanished after the ownership gate loaded it, the write matches
 * nothing and the handler answers 404.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiQuery};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::ownership::{parse_post_id, OwnedPost, POST_NOT_FOUND};
use crate::backend::posts::types::{ListPostsResponse, MessageResponse, PostResponse};
use crate::backend::server::state::AppState;
use crate::backend::store::NewPost;
use crate::shared::{CreatePostRequest, ListPostsQuery, PageInfo, PageRequest, UpdatePostRequest};

/// List posts, newest first unless `sort` says otherwise
///
/// Query parameters: `page` (default 1), `limit` (default 10, max 100),
/// `sort` (`createdAt`, `updatedAt` or `title`, `-` prefix for descending).
pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPostsQuery>,
) -> Result<Json<ListPostsResponse>, BackendError> {
    let request = PageRequest::try_from(query)?;
    let page = state.posts.list_posts(&request).await?;

    tracing::debug!(
        page = request.page,
        limit = request.limit,
        returned = page.posts.len(),
        "Listed posts"
    );

    Ok(Json(ListPostsResponse {
        success: true,
        posts: page.posts.into_iter().map(|p| p.into_view()).collect(),
        pagination: PageInfo::new(&request, page.total),
    }))
}

/// Fetch one post by id
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PostResponse>, BackendError> {
    let post_id = parse_post_id(&raw_id)?;
    let post = state
        .posts
        .find_post(post_id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    Ok(Json(PostResponse {
        success: true,
        post: post.into_view(),
    }))
}

/// Create a post authored by the caller
///
/// A valid token for an account that no longer exists answers 404.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), BackendError> {
    let (title, content) = request.validate()?;

    let post = state
        .posts
        .create_post(NewPost {
            title,
            content,
            author_id: caller.user_id,
        })
        .await?;

    tracing::info!(post_id = %post.post.id, user_id = %caller.user_id, "Post created");

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            success: true,
            post: post.into_view(),
        }),
    ))
}

/// Update title and/or content of a post the caller wrote
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Extension(OwnedPost(existing)): Extension<OwnedPost>,
    ApiJson(request): ApiJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>, BackendError> {
    let changes = request.validate()?;

    let post = state
        .posts
        .update_post_by_author(existing.post.id, caller.user_id, changes)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    tracing::info!(post_id = %post.post.id, user_id = %caller.user_id, "Post updated");

    Ok(Json(PostResponse {
        success: true,
        post: post.into_view(),
    }))
}

/// Delete a post the caller wrote
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Extension(OwnedPost(existing)): Extension<OwnedPost>,
) -> Result<Json<MessageResponse>, BackendError> {
    let deleted = state
        .posts
        .delete_post_by_author(existing.post.id, caller.user_id)
        .await?;
    if !deleted {
        return Err(BackendError::not_found(POST_NOT_FOUND));
    }

    tracing::info!(post_id = %existing.post.id, user_id = %caller.user_id, "Post deleted");

    Ok(Json(MessageResponse {
        success: true,
        message: "Post deleted successfully".to_string(),
    }))
}

/**
 * Ownership Middleware
 *
 * Guards routes that mutate a single post. Runs after `require_auth`:
 * loads the post named by the `{id}` path segment and rejects the request
 * unless the authenticated caller wrote it.
 *
 * - unparseable or unknown id: 404
 * - post written by someone else: 403
 *
 * On success the loaded post is attached to the request as `OwnedPost`.
 * The write that follows is still conditioned on the author id, so a post
 * deleted or changed between this check and the write cannot be touched by
 * anyone but its author.
 */

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::SharedPosts;
use crate::backend::store::PostWithAuthor;

pub const POST_NOT_FOUND: &str = "Post not found";
pub const NOT_POST_OWNER: &str = "You can only modify your own posts";

/// The post loaded by `require_post_owner`
#[derive(Clone, Debug)]
pub struct OwnedPost(pub PostWithAuthor);

/// Parse a post id from a path segment; anything that is not a UUID is a 404
pub fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found(POST_NOT_FOUND))
}

/// Ownership gate for `/api/posts/{id}`
pub async fn require_post_owner(
    State(posts): State<SharedPosts>,
    Path(raw_id): Path<String>,
    AuthUser(caller): AuthUser,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let post_id = parse_post_id(&raw_id)?;

    let post = posts
        .find_post(post_id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    if post.post.author_id != caller.user_id {
        tracing::warn!(
            post_id = %post_id,
            user_id = %caller.user_id,
            "Rejected change to another user's post"
        );
        return Err(BackendError::forbidden(NOT_POST_OWNER));
    }

    request.extensions_mut().insert(OwnedPost(post));
    Ok(next.run(request).await)
}

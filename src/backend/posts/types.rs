/**
 * Post Handler Types
 *
 * Response envelopes for the post endpoints. Request bodies live in
 * `shared::post` so clients can reuse them.
 */

use serde::{Deserialize, Serialize};

use crate::shared::{PageInfo, PostView};

/// Body of `GET /api/post`
#[derive(Serialize, Deserialize, Debug)]
pub struct ListPostsResponse {
    pub success: bool,
    pub posts: Vec<PostView>,
    pub pagination: PageInfo,
}

/// A single post
#[derive(Serialize, Deserialize, Debug)]
pub struct PostResponse {
    pub success: bool,
    pub post: PostView,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/**
 * Post Wire Types
 *
 * Request bodies for creating and editing posts, and the post view returned
 * to clients with its author embedded.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{validate_content, validate_title};

/// Author details embedded in every post view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A post as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/posts`
///
/// There is no author field: the author is always the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl CreatePostRequest {
    /// Validate and normalise the request into `(title, content)`
    pub fn validate(self) -> Result<(String, String), SharedError> {
        let title = validate_title(&self.title)?;
        let content = validate_content(&self.content)?;
        Ok((title, content))
    }
}

/// Body of `PUT /api/posts/{id}`
///
/// Unknown fields (including `author`) are ignored, so authorship can never
/// be reassigned through an update.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A validated partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    /// Validate the provided fields; at least one must be present
    pub fn validate(self) -> Result<PostChanges, SharedError> {
        if self.title.is_none() && self.content.is_none() {
            return Err(SharedError::validation(
                "body",
                "Provide a title or content to update",
            ));
        }
        let title = self.title.as_deref().map(validate_title).transpose()?;
        let content = self.content.as_deref().map(validate_content).transpose()?;
        Ok(PostChanges { title, content })
    }
}

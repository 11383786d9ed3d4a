/**
 * Storage Models
 *
 * Rows as they are persisted. `User` carries the password hash and is never
 * serialised directly; handlers convert it to `UserProfile` first.
 */
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::shared::{AuthorSummary, PostView, UserProfile};

/// A stored user account
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// bcrypt hash, never the plaintext
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl User {
    /// Public view of this account
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            created_at: self.created_at,
        }
    }
}

/// Validated input for inserting a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

/// A stored post
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Set once at creation; no operation changes it
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// A post joined with its author's name and email
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostWithAuthor {
    #[sqlx(flatten)]
    pub post: Post,
    pub author_name: String,
    pub author_email: String,
}

impl PostWithAuthor {
    pub fn into_view(self) -> PostView {
        PostView {
            id: self.post.id,
            title: self.post.title,
            content: self.post.content,
            author: AuthorSummary {
                id: self.post.author_id,
                name: self.author_name,
                email: self.author_email,
            },
            created_at: self.post.created_at,
            updated_at: self.post.updated_at,
        }
    }
}

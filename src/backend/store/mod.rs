//! Storage Module
//!
//! Repository traits for users and posts, plus two implementations:
//!
//! - **`postgres`** - `PgStore`, backed by a sqlx `PgPool`
//! - **`memory`** - `MemoryStore`, used when no database is configured
//!   and in tests
//!
//! # Invariants enforced by every implementation
//!
//! - Email and phone are unique across users. A duplicate insert fails
//!   with `StoreError::Conflict` and leaves no record behind.
//! - Post updates and deletes are a single write conditioned on both the
//!   post id and the author id, so a caller that is not the author can
//!   never mutate a post even if it races the ownership check.
//! - Listings order by the requested field with a stable tie-breaker.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{PageRequest, PostChanges};

/// Storage models
pub mod models;

/// In-memory repositories
pub mod memory;

/// Postgres repositories
pub mod postgres;

pub use memory::MemoryStore;
pub use models::{NewPost, NewUser, Post, PostWithAuthor, User};
pub use postgres::PgStore;

/// Errors raised by repositories
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique field is already taken
    #[error("{field} already exists")]
    Conflict {
        /// `"email"` or `"phone"`
        field: &'static str,
    },

    /// The referenced author does not exist
    #[error("author does not exist")]
    AuthorNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// One page of posts plus the total number of posts
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<PostWithAuthor>,
    pub total: u64,
}

/// Credential store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; fails with `StoreError::Conflict` on a duplicate email or phone
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Look up a user by normalised email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

/// Post store
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post; fails with `StoreError::AuthorNotFound` if the author is gone
    async fn create_post(&self, new_post: NewPost) -> Result<PostWithAuthor, StoreError>;

    async fn find_post(&self, id: Uuid) -> Result<Option<PostWithAuthor>, StoreError>;

    async fn list_posts(&self, request: &PageRequest) -> Result<PostPage, StoreError>;

    /// Apply `changes` only if the post exists and `author_id` wrote it.
    /// Returns `None` when nothing matched.
    async fn update_post_by_author(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<PostWithAuthor>, StoreError>;

    /// Delete only if the post exists and `author_id` wrote it.
    /// Returns whether a post was deleted.
    async fn delete_post_by_author(&self, id: Uuid, author_id: Uuid) -> Result<bool, StoreError>;
}

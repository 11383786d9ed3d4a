//! Shared Module
//!
//! Types and rules that do not depend on the server stack: request and
//! response bodies, pagination, and field validation. A client crate can
//! depend on this module with `default-features = false`.

/// Shared error types
pub mod error;

/// Field validation rules
pub mod validation;

/// User wire types
pub mod user;

/// Post wire types
pub mod post;

/// Pagination and sorting
pub mod pagination;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use pagination::{ListPostsQuery, PageInfo, PageRequest, PostSort, SortDirection, SortField};
pub use post::{AuthorSummary, CreatePostRequest, PostChanges, PostView, UpdatePostRequest};
pub use user::UserProfile;

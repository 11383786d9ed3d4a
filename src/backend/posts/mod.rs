//! Posts Module
//!
//! HTTP handlers for blog posts and their response types.
//!
//! - **`handlers`** - list, get, create, update and delete
//! - **`types`** - response envelopes
//!
//! Reads are public. Creating a post requires the auth gate; updating and
//! deleting additionally require the ownership gate.

/// Post handlers
pub mod handlers;

/// Response types
pub mod types;

pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
pub use types::{ListPostsResponse, MessageResponse, PostResponse};

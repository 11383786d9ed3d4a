//! Middleware Module
//!
//! Request gates applied with `route_layer`, so they only run for requests
//! that matched a route and can read its path parameters.
//!
//! - **`auth`** - Auth gate: verifies the bearer token, attaches `AuthenticatedUser`
//! - **`ownership`** - Ownership gate: loads the addressed post, checks authorship
//!
//! On a route that needs both, the auth layer is added last so it wraps the
//! ownership layer and runs first.
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use blog_api::backend::middleware::{require_auth, AuthUser};
//! use blog_api::backend::server::state::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/whoami", get(|AuthUser(user): AuthUser| async move { user.user_id.to_string() }))
//!         .route_layer(from_fn_with_state(state, require_auth))
//! }
//! ```

pub mod auth;

pub mod ownership;

pub use auth::{bearer_token, require_auth, AuthUser, AuthenticatedUser};
pub use ownership::{parse_post_id, require_post_owner, OwnedPost};

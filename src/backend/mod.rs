//! Backend Module
//!
//! This module contains all server-side code of the blog API: an Axum HTTP
//! server exposing user accounts and blog posts over JSON.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly, health check, fallback
//! - **`auth`** - Password hashing, session tokens, auth handlers
//! - **`posts`** - Post handlers
//! - **`middleware`** - Auth gate and ownership gate
//! - **`store`** - Repository traits with Postgres and in-memory implementations
//! - **`extract`** - JSON and query extractors with JSON error responses
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Request Flow
//!
//! ```text
//! request → auth gate (protected routes) → ownership gate (post mutations) → handler → store
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Blog post handlers
pub mod posts;

/// Request gates
pub mod middleware;

/// Persistence
pub mod store;

/// Request extractors
pub mod extract;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};

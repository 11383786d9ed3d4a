//! Backend Error Module
//!
//! This module defines the error type returned by every handler and
//! middleware, and its conversion into JSON HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` and its status code mapping
//! - **`conversion`** - `IntoResponse` and extractor rejection conversions
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_api::backend::error::BackendError;
//!
//! async fn handler() -> Result<&'static str, BackendError> {
//!     Err(BackendError::not_found("Post not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE, USER_NOT_FOUND};

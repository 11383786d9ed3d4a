//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, tracing and CORS layers
//! - **`api_routes`** - Auth and post endpoints with their gates
//! - **`health`** - Health check and JSON 404 fallback
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_api::backend::routes::create_router;
//! use blog_api::backend::server::{config::ServerConfig, state::AppState};
//!
//! let config = ServerConfig::new("dev-secret");
//! let router = create_router(AppState::in_memory(&config));
//! ```

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

/// Health check and fallback handlers
pub mod health;

pub use router::{cors_layer, create_router};

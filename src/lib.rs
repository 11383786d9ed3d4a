//! Blog API - Main Library
//!
//! A small REST API for users and blog posts, secured with stateless JWT
//! bearer tokens and per-post ownership checks.
//!
//! # Overview
//!
//! This library provides:
//! - User signup and login with bcrypt password hashing
//! - JWT issuing and verification (no server-side sessions)
//! - An auth gate and an ownership gate as axum middleware
//! - Paginated post listing with the author embedded in each post
//! - Postgres persistence through sqlx, with an in-memory fallback
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and validation rules usable without the
//!   server stack (request/response bodies, pagination, field checks)
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router, handlers and middleware
//!   - Token issuer and password hasher
//!   - User and post repositories (Postgres and in-memory)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the `backend` module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use blog_api::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Request Pipeline
//!
//! ```text
//! request -> auth gate (protected routes)
//!         -> ownership gate (PUT/DELETE /api/posts/{id})
//!         -> handler -> repository
//! ```
//!
//! Any gate that fails short-circuits with a JSON error body
//! `{"success": false, "message": ...}` before the handler runs.

/// Shared types and validation rules
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

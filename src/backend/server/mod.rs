//! Server Module
//!
//! This module contains the code that configures and assembles the Axum
//! HTTP server.
//!
//! # Architecture
//!
//! - **`config`** - Settings loaded from environment variables
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Store selection and app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Selection**: Postgres with migrations, or in-memory
//! 3. **Router Creation**: routes, gates, tracing and CORS
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_api::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;

/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection and route configuration.
 *
 * # Initialization Process
 *
 * 1. Select the store: Postgres when `DATABASE_URL` is set (connect, then
 *    run migrations), otherwise the in-memory store
 * 2. Build the application state (token issuer, password hasher)
 * 3. Create the router and wrap it in the CORS layer
 *
 * A configured database that cannot be reached or migrated is a startup
 * error; the server does not silently fall back to memory in that case.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::{cors_layer, create_router};
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{PgStore, StoreError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database setup failed: {0}")]
    Store(#[from] StoreError),
}

/// Build the application state for `config`
pub async fn load_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Data is kept in memory and lost on restart.");
        return Ok(AppState::in_memory(config));
    };

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    store.migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(AppState::postgres(config, store))
}

pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing blog API server");

    let app_state = load_state(config).await?;
    tracing::info!(storage = app_state.storage, "Application state ready");

    let app = create_router(app_state).layer(cors_layer(config.cors_origin.as_deref())?);

    tracing::info!("Router configured");
    Ok(app)
}

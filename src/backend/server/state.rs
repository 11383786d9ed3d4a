/**
 * Application State Management
 *
 * This module defines the application state and the `FromRef`
 * implementations that let handlers extract only the part they need.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The user and post repositories, as trait objects so the same router
 *   runs on Postgres or on the in-memory store
 * - The token issuer and password hasher
 * - A label for the active store, reported by the health endpoint
 *
 * Everything is behind `Arc` or `Copy`, so cloning the state per request
 * is cheap.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::{MemoryStore, PgStore, PostRepository, UserRepository};

pub type SharedUsers = Arc<dyn UserRepository>;
pub type SharedPosts = Arc<dyn PostRepository>;

#[derive(Clone)]
pub struct AppState {
    pub users: SharedUsers,

    pub posts: SharedPosts,

    pub tokens: Arc<TokenIssuer>,

    pub passwords: PasswordHasher,

    /// `"postgres"` or `"memory"`
    pub storage: &'static str,
}

impl AppState {
    /// State backed by a fresh in-memory store
    pub fn in_memory(config: &ServerConfig) -> Self {
        let store = MemoryStore::new();
        Self::with_store(config, Arc::new(store.clone()), Arc::new(store), "memory")
    }

    /// State backed by Postgres
    pub fn postgres(config: &ServerConfig, store: PgStore) -> Self {
        Self::with_store(config, Arc::new(store.clone()), Arc::new(store), "postgres")
    }

    fn with_store(
        config: &ServerConfig,
        users: SharedUsers,
        posts: SharedPosts,
        storage: &'static str,
    ) -> Self {
        Self {
            users,
            posts,
            tokens: Arc::new(TokenIssuer::new(&config.jwt_secret, config.token_ttl)),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            storage,
        }
    }
}

impl FromRef<AppState> for SharedUsers {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for SharedPosts {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/signup` - User registration
 * - `POST /auth/login` - User login
 * - `GET /auth/me` - Current user (auth gate)
 *
 * ## Posts
 * - `GET /api/post` - Paginated listing
 * - `GET /api/post/{id}` - Single post
 * - `POST /api/posts` - Create (auth gate)
 * - `PUT /api/posts/{id}` - Update (auth gate, ownership gate)
 * - `DELETE /api/posts/{id}` - Delete (auth gate, ownership gate)
 *
 * Gates are attached with `route_layer` to groups of routes, then the groups
 * are merged. Within a group the layer added last runs first, so the auth
 * gate is always added after the ownership gate.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, signup};
use crate::backend::middleware::{require_auth, require_post_owner};
use crate::backend::posts::{create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Routes open to anonymous callers
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/api/post", get(list_posts))
        .route("/api/post/{id}", get(get_post))
}

/// Routes behind the auth gate
fn authenticated_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(get_me))
        .route("/api/posts", post(create_post))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth))
}

/// Routes behind the auth gate and then the ownership gate
fn owner_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        .route_layer(from_fn_with_state(app_state.clone(), require_post_owner))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth))
}

pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(authenticated_routes(app_state))
        .merge(owner_routes(app_state))
}

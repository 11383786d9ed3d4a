/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. API routes (auth, posts)
 * 3. JSON 404 fallback
 *
 * Every request is traced with `tower_http::trace::TraceLayer`.
 */

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::health::{health, route_not_found};
use crate::backend::server::config::ConfigError;
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// CORS policy: a single allowed origin, or any origin when unset
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                name: "CORS_ORIGIN",
                value: origin.to_string(),
                reason: e.to_string(),
            })?;
            Ok(layer.allow_origin(value))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}

/**
 * Health and Fallback Handlers
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    /// Which store backs this process
    pub storage: String,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        storage: state.storage.to_string(),
    })
}

/// JSON 404 for unmatched routes
pub async fn route_not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * An unknown email and a wrong password produce the same 401 response, so
 * the endpoint cannot be used to discover which emails are registered.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::users::authenticate;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Storage or token signing failed
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let user = authenticate(
        state.users.as_ref(),
        &state.passwords,
        &request.email,
        &request.password,
    )
    .await?;

    let token = state.tokens.issue_session(user.id)?;
    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        success: true,
        token,
        user: user.profile(),
    }))
}

/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate name, email, phone and password
 * 2. Hash the password with bcrypt
 * 3. Create the user; the store rejects duplicate email or phone
 * 4. Issue a session token so the client is logged in immediately
 *
 * # Validation
 *
 * - Name: 2-25 characters
 * - Email: valid address, compared case-insensitively
 * - Phone: 10-15 digits, optional leading `+`
 * - Password: at least 6 characters
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::users::register_user;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - A field failed validation
/// * `409 Conflict` - Email or phone is already registered
/// * `500 Internal Server Error` - Hashing, storage or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "phone": "+15550001111",
///   "password": "secret1"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request");

    let user = register_user(
        state.users.as_ref(),
        &state.passwords,
        &request.name,
        &request.email,
        &request.phone,
        &request.password,
    )
    .await
    .inspect_err(|e| tracing::warn!(error = %e, "Signup rejected"))?;

    let token = state.tokens.issue_session(user.id)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user: user.profile(),
        }),
    ))
}

/**
 * Get Current User Handler
 *
 * GET /auth/me, behind the auth gate. Returns the profile of the account
 * the bearer token was issued for.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::{BackendError, USER_NOT_FOUND};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::SharedUsers;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid token (rejected by the auth gate)
/// * `404 Not Found` - The token is valid but the account no longer exists
pub async fn get_me(
    State(users): State<SharedUsers>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = users
        .find_user_by_id(caller.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

    Ok(Json(UserResponse {
        success: true,
        user: user.profile(),
    }))
}

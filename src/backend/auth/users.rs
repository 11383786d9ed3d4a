/**
 * Account Operations
 *
 * Registration and credential checks on top of a `UserRepository`.
 * Handlers call these after extracting the request; the functions own
 * validation, hashing and the mapping of store failures to API errors.
 */

use crate::backend::auth::password::PasswordHasher;
use crate::backend::error::BackendError;
use crate::backend::store::{NewUser, User, UserRepository};
use crate::shared::validation::{
    normalize_email, validate_email, validate_name, validate_password, validate_phone,
};

/// Same message for unknown email and wrong password
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Validate signup fields, hash the password and create the account
///
/// # Errors
///
/// * `Validation` - A field is missing or malformed
/// * `Conflict` - Email or phone is already registered
/// * `Internal` - Hashing or storage failed
pub async fn register_user(
    users: &dyn UserRepository,
    hasher: &PasswordHasher,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<User, BackendError> {
    let name = validate_name(name)?;
    let email = validate_email(email)?;
    let phone = validate_phone(phone)?;
    validate_password(password)?;

    let password_hash = hasher.hash(password).await?;

    let user = users
        .create_user(NewUser {
            name,
            email,
            phone,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(user)
}

/// Check an email and password pair
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub async fn authenticate(
    users: &dyn UserRepository,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
) -> Result<User, BackendError> {
    let email = normalize_email(email);
    if email.is_empty() || password.is_empty() {
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let Some(user) = users.find_user_by_email(&email).await? else {
        tracing::warn!("Login attempt for unknown email");
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    };

    if !hasher.verify(password, &user.password_hash).await? {
        tracing::warn!(user_id = %user.id, "Login attempt with wrong password");
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    Ok(user)
}

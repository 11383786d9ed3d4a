/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the API. Every handler and
 * middleware returns `BackendError`, and each variant maps to exactly one
 * HTTP status.
 *
 * # Status Code Mapping
 *
 * | Variant        | Status |
 * |----------------|--------|
 * | `Validation`   | 400    |
 * | `Unauthorized` | 401    |
 * | `Forbidden`    | 403    |
 * | `NotFound`     | 404    |
 * | `Conflict`     | 409    |
 * | `Internal`     | 500    |
 *
 * Store errors are folded in: a unique violation becomes `Conflict`, any
 * other database failure becomes `Internal`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message sent to clients for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message for a valid token whose user has since been removed
pub const USER_NOT_FOUND: &str = "User not found";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blog_api::backend::error::BackendError;
///
/// let err = BackendError::forbidden("You can only modify your own posts");
/// assert_eq!(err.status_code().as_u16(), 403);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request data failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Missing, malformed, invalid or expired credentials
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Authenticated caller is not allowed to touch the resource
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A unique field is already in use
    #[error("Conflict on '{field}': {message}")]
    Conflict { field: String, message: String },

    /// Unexpected failure; details are logged, never returned
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.message().to_string(),
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message, .. } => message.clone(),
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Offending field, for validation and conflict errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation(err) => Some(err.field()),
            Self::Conflict { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { field } => {
                let message = match field {
                    "phone" => "Phone number is already registered",
                    _ => "Email is already registered",
                };
                Self::conflict(field, message)
            }
            StoreError::AuthorNotFound => Self::not_found(USER_NOT_FOUND),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::unauthorized("Token has expired"),
            TokenError::InvalidSignature | TokenError::Malformed => {
                Self::unauthorized("Invalid token")
            }
            TokenError::Signing(message) => Self::internal(message),
        }
    }
}

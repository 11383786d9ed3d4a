/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It reads the bearer token from the Authorization
 * header, verifies it and hands the user id to downstream handlers through
 * the request extensions.
 *
 * Verification is stateless: the store is not consulted, so a valid token
 * for an account that no longer exists still passes the gate. Handlers
 * that need the account look it up themselves.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::BackendError;

/// Identity attached to requests that passed `require_auth`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Authentication required")
        })?;

    let (scheme, token) = header.split_once(' ').ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized("Authorization header must be 'Bearer <token>'")
    })?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        tracing::warn!("Invalid Authorization header format");
        return Err(BackendError::unauthorized(
            "Authorization header must be 'Bearer <token>'",
        ));
    }

    Ok(token)
}

/// Auth gate: rejects with 401 unless the request carries a valid token
pub async fn require_auth(
    State(tokens): State<Arc<TokenIssuer>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected bearer token");
        BackendError::from(e)
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated caller
///
/// Only valid on routes behind `require_auth`; elsewhere it rejects with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}

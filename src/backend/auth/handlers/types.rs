/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across signup, login, and get_me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::shared::UserProfile;

/// Missing fields deserialize as empty strings and are reported by validation
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by signup and login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

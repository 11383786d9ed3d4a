//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! tokens.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing on the blocking thread pool
//! - **`sessions`** - Signed, expiring bearer tokens
//! - **`users`** - Registration and login on top of `UserRepository`
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email, phone and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: bearer token → auth gate → profile returned
//!
//! # Security
//!
//! - Passwords are stored as salted bcrypt hashes only
//! - Tokens are stateless; logout is the client discarding its token
//! - Invalid credentials return the same 401 whatever the cause

/// Password hashing
pub mod password;

/// Session token issuing and verification
pub mod sessions;

/// Account operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, signup, AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{Claims, TokenError, TokenIssuer};

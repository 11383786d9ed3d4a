//! Field validation rules for users and posts.
//!
//! Each validator returns the normalised value that should be stored, so
//! callers never persist the raw client input.

use regex::Regex;
use std::sync::LazyLock;

use crate::shared::error::SharedError;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 25;
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// bcrypt ignores everything past this many bytes
pub const MAX_PASSWORD_BYTES: usize = 72;
pub const MAX_TITLE_LENGTH: usize = 25;
const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321 SMTP limit

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern compiles")
});
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern compiles"));

/// Validate a display name: 2-25 characters after trimming
pub fn validate_name(name: &str) -> Result<String, SharedError> {
    let name = name.trim();
    let length = name.chars().count();
    if length < MIN_NAME_LENGTH || length > MAX_NAME_LENGTH {
        return Err(SharedError::validation(
            "name",
            format!("Name must be between {MIN_NAME_LENGTH} and {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(name.to_string())
}

/// Trim and lower-case an email so lookups and uniqueness ignore case
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an email address and return its normalised form
pub fn validate_email(email: &str) -> Result<String, SharedError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(SharedError::validation("email", "Email is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_REGEX.is_match(&email) {
        return Err(SharedError::validation("email", "Please provide a valid email"));
    }
    Ok(email)
}

/// Validate a phone number and return it as `+` followed by its digits.
///
/// Spaces, dashes and parentheses are dropped; what remains must be an
/// optional `+` followed by 10-15 digits. The stored form always carries
/// the `+`, so `15550001111` and `+15550001111` are the same number.
pub fn validate_phone(phone: &str) -> Result<String, SharedError> {
    let phone: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    if phone.is_empty() {
        return Err(SharedError::validation("phone", "Phone number is required"));
    }
    if !PHONE_REGEX.is_match(&phone) {
        return Err(SharedError::validation(
            "phone",
            "Phone number must be 10-15 digits, optionally starting with +",
        ));
    }
    let digits = phone.trim_start_matches('+');
    Ok(format!("+{digits}"))
}

/// Validate a plaintext password before it is hashed
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {MAX_PASSWORD_BYTES} bytes"),
        ));
    }
    Ok(())
}

/// Validate a post title: required, at most 25 characters
pub fn validate_title(title: &str) -> Result<String, SharedError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(SharedError::validation("title", "Title is required"));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at most {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(title.to_string())
}

/// Validate post content: required and not only whitespace
pub fn validate_content(content: &str) -> Result<String, SharedError> {
    if content.trim().is_empty() {
        return Err(SharedError::validation("content", "Content is required"));
    }
    Ok(content.to_string())
}

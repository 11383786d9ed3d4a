/**
 * Server Configuration
 *
 * This module loads server settings from environment variables.
 *
 * # Variables
 *
 * | Variable         | Default | Notes                                     |
 * |------------------|---------|-------------------------------------------|
 * | `PORT`           | `3000`  |                                           |
 * | `DATABASE_URL`   | unset   | unset runs on the in-memory store         |
 * | `JWT_SECRET`     | -       | required, non-empty                       |
 * | `JWT_EXPIRES_IN` | `1d`    | `<n>` seconds or `<n>s`, `m`, `h`, `d`    |
 * | `BCRYPT_COST`    | `12`    | 4-31                                      |
 * | `CORS_ORIGIN`    | unset   | unset allows any origin                   |
 *
 * `from_lookup` takes the variable source as a closure so tests can build a
 * config without touching the process environment.
 */

use chrono::TimeDelta;
use std::net::SocketAddr;
use thiserror::Error;

use crate::backend::auth::password::DEFAULT_BCRYPT_COST;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TOKEN_TTL: &str = "1d";

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Runtime settings for the API server
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: TimeDelta,
    pub bcrypt_cost: u32,
    pub cors_origin: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

impl ServerConfig {
    /// Build a config with defaults for everything but the secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: jwt_secret.into(),
            token_ttl: TimeDelta::days(1),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cors_origin: None,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("PORT", &raw, e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let token_ttl = match get("JWT_EXPIRES_IN") {
            Some(raw) => parse_duration(&raw).ok_or_else(|| {
                ConfigError::invalid("JWT_EXPIRES_IN", &raw, "expected e.g. 3600, 30m, 12h or 1d")
            })?,
            None => TimeDelta::days(1),
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ConfigError::invalid("BCRYPT_COST", &raw, e.to_string()))?;
                if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                    return Err(ConfigError::invalid(
                        "BCRYPT_COST",
                        &raw,
                        format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
                    ));
                }
                cost
            }
            None => DEFAULT_BCRYPT_COST,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            cors_origin: get("CORS_ORIGIN"),
        })
    }

    /// Address the server listens on (all interfaces)
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Parse a token lifetime such as `3600`, `45s`, `30m`, `12h` or `7d`.
///
/// Returns `None` for zero, negative, unknown units or overflow.
pub fn parse_duration(raw: &str) -> Option<TimeDelta> {
    let raw = raw.trim();
    let (digits, unit) = match raw.char_indices().last()? {
        (idx, c) if c.is_ascii_alphabetic() => (&raw[..idx], c),
        _ => (raw, 's'),
    };
    let amount: i64 = digits.parse().ok().filter(|n| *n > 0)?;
    match unit {
        's' => TimeDelta::try_seconds(amount),
        'm' => TimeDelta::try_minutes(amount),
        'h' => TimeDelta::try_hours(amount),
        'd' => TimeDelta::try_days(amount),
        _ => None,
    }
}

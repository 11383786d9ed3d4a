/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both are CPU-bound, so they run on the
 * blocking thread pool instead of stalling the async executor.
 */

use thiserror::Error;

/// bcrypt work factor used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted password hasher with a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash `plaintext` with a fresh random salt
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(hashed)
    }

    /// Check `plaintext` against a stored hash
    pub async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        let matches =
            tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash)).await??;
        Ok(matches)
    }
}

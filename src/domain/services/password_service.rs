use async_trait::async_trait;

use crate::domain::error::PasswordError;

/// Salted one-way hashing primitive
#[async_trait]
pub trait PasswordHasher: Clone + Send + Sync {
    /// Hash a plain text password with a fresh salt at the given cost factor
    async fn hash(&self, plain_password: &str, rounds: u32) -> Result<String, PasswordError>;

    /// Verify a plain text password against a stored hash.
    /// A well-formed hash that does not match is `Ok(false)`.
    async fn verify(&self, plain_password: &str, hashed_password: &str) -> Result<bool, PasswordError>;
}

use async_trait::async_trait;

use crate::domain::{error::PasswordError, services::password_service::PasswordHasher};

/// bcrypt on tokio's blocking pool, so the caller's runtime thread is never
/// stuck on a key derivation.
#[derive(Clone)]
pub struct BcryptPasswordHasher;

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plain_password: &str, rounds: u32) -> Result<String, PasswordError> {
        let plain_password = plain_password.to_owned();
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plain_password, rounds)).await??;
        Ok(hash)
    }

    async fn verify(&self, plain_password: &str, hashed_password: &str) -> Result<bool, PasswordError> {
        let plain_password = plain_password.to_owned();
        let hashed_password = hashed_password.to_owned();
        let matched = tokio::task::spawn_blocking(move || bcrypt::verify(plain_password, &hashed_password))
            .await??;
        Ok(matched)
    }
}

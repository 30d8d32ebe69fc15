use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    domain::{
        error::{HookError, PasswordError},
        models::{
            field::{Accessor, FieldValue, SecretField},
            hash_format,
            options::PasswordOptions,
            update::{HookContext, UpdateIntent},
        },
        services::{lifecycle::LifecycleHook, password_service::PasswordHasher},
    },
    infrastructure::bcrypt_password_hasher::BcryptPasswordHasher,
};

/// Frozen options plus a hasher; binds to any record type through a field accessor.
#[derive(Clone)]
pub struct PasswordPolicy<H: PasswordHasher> {
    options: Arc<PasswordOptions>,
    password_hasher: H,
}

impl PasswordPolicy<BcryptPasswordHasher> {
    pub fn bcrypt(options: PasswordOptions) -> Self {
        Self::new(options, BcryptPasswordHasher::new())
    }
}

impl<H: PasswordHasher> PasswordPolicy<H> {
    pub fn new(options: PasswordOptions, password_hasher: H) -> Self {
        Self {
            options: Arc::new(options),
            password_hasher,
        }
    }

    pub fn options(&self) -> &PasswordOptions {
        &self.options
    }

    /// Bind an accessor as is; its own name is what update payloads and
    /// errors are matched against.
    pub fn bind<F>(&self, field: F) -> PasswordInterceptor<F, H> {
        PasswordInterceptor {
            options: Arc::clone(&self.options),
            field,
            password_hasher: self.password_hasher.clone(),
        }
    }

    /// Bind a getter/setter pair under the configured `password_field` name.
    pub fn bind_accessor<R>(
        &self,
        get: fn(&R) -> FieldValue,
        set: fn(&mut R, String),
    ) -> PasswordInterceptor<Accessor<R>, H> {
        self.bind(Accessor::new(self.options.password_field(), get, set))
    }
}

/// Hashes the configured field of a record before it is written and checks
/// candidate passwords against the stored hash.
///
/// As a [`LifecycleHook`] it hashes on every insert, and on every update
/// except a patch whose payload leaves the password out.
#[derive(Clone)]
pub struct PasswordInterceptor<F, H: PasswordHasher> {
    options: Arc<PasswordOptions>,
    field: F,
    password_hasher: H,
}

impl<F, H: PasswordHasher> PasswordInterceptor<F, H> {
    pub fn options(&self) -> &PasswordOptions {
        &self.options
    }

    /// True if `candidate` is already a bcrypt hash.
    pub fn is_hash_format(candidate: &str) -> bool {
        hash_format::is_hash_format(candidate)
    }

    /// Hash the field in place.
    ///
    /// Returns the stored hash, or `None` when the field is empty and empty
    /// passwords are allowed; the field is then left exactly as submitted.
    pub async fn generate_hash<R>(&self, record: &mut R) -> Result<Option<String>, PasswordError>
    where
        F: SecretField<R>,
    {
        let password_field = self.field.name();
        let value = self.field.read(record)?;

        if let Some(plain_password) = value.secret() {
            if Self::is_hash_format(plain_password) {
                warn!(password_field, "refusing to hash a value that is already a bcrypt hash");
                return Err(PasswordError::DoubleHash {
                    field: password_field.to_string(),
                });
            }

            let rounds = self.options.rounds();
            let hash = self.password_hasher.hash(plain_password, rounds).await?;
            self.field.write(record, hash.clone())?;
            debug!(password_field, rounds, "password hashed");
            return Ok(Some(hash));
        }

        if !self.options.allow_empty_password() {
            return Err(PasswordError::EmptyPassword {
                field: password_field.to_string(),
            });
        }

        debug!(password_field, "empty password allowed, field left as submitted");
        Ok(None)
    }

    /// Whether `candidate` matches the stored hash. A record without a stored
    /// secret never matches.
    pub async fn verify_password<R>(&self, record: &R, candidate: &str) -> Result<bool, PasswordError>
    where
        F: SecretField<R>,
    {
        let stored = self.field.read(record)?;
        self.verify_value(&stored, candidate).await
    }

    /// Same check against a stored column value read outside the accessor,
    /// e.g. from a loaded row rather than a record being saved.
    pub async fn verify_value(&self, stored: &FieldValue, candidate: &str) -> Result<bool, PasswordError> {
        match stored.secret() {
            Some(hashed_password) => self.password_hasher.verify(candidate, hashed_password).await,
            None => Ok(false),
        }
    }
}

#[async_trait]
impl<R, F, H> LifecycleHook<R> for PasswordInterceptor<F, H>
where
    R: Send,
    F: SecretField<R>,
    H: PasswordHasher,
{
    async fn before_insert(&self, record: &mut R, _ctx: &HookContext) -> Result<(), HookError> {
        self.generate_hash(record).await?;
        Ok(())
    }

    async fn before_update(
        &self,
        record: &mut R,
        intent: &UpdateIntent,
        ctx: &HookContext,
    ) -> Result<(), HookError> {
        let password_field = self.field.name();
        if !intent.touches(password_field) {
            debug!(entity = ctx.entity(), password_field, "patch leaves password untouched");
            return Ok(());
        }

        self.generate_hash(record).await?;
        Ok(())
    }
}

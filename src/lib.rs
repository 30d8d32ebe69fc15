//! Hash a record's password field before it is persisted, without ever
//! hashing a value that already is a hash.
//!
//! A [`PasswordPolicy`] freezes [`PasswordOptions`] and a hasher, and binds
//! them to a record type through a field accessor. The resulting
//! [`PasswordInterceptor`] is a [`LifecycleHook`]; push it onto the record
//! type's [`HookChain`] and run the chain from the persistence layer's
//! before-save hook (see [`HookChain::before_save`] for sea-orm).

pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use domain::{
    error::{ConfigError, HookError, PasswordError},
    models::{
        field::{Accessor, FieldValue, SecretField},
        hash_format::{HashParts, is_hash_format},
        options::PasswordOptions,
        update::{HookContext, Operation, UpdateIntent},
    },
    services::{lifecycle::{HookChain, LifecycleHook}, password_service::PasswordHasher},
};
pub use infrastructure::{
    bcrypt_password_hasher::BcryptPasswordHasher,
    column_field::{ColumnField, update_intent},
};
pub use usecase::password_interceptor::{PasswordInterceptor, PasswordPolicy};

#[cfg(test)]
mod test_support;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

pub const DEFAULT_PASSWORD_FIELD: &str = "password";
pub const RECOMMENDED_ROUNDS: u32 = 12;

const ENV_PASSWORD_FIELD: &str = "PASSWORD_FIELD";
const ENV_ALLOW_EMPTY: &str = "PASSWORD_ALLOW_EMPTY";
const ENV_ROUNDS: &str = "PASSWORD_ROUNDS";

/// Hashing policy shared by every record of a configured type.
///
/// Built once at setup with the `with_*` methods, then frozen behind an `Arc`
/// by [`PasswordPolicy`](crate::usecase::password_interceptor::PasswordPolicy).
/// `rounds` is passed to the hashing primitive untouched; the primitive
/// rejects out-of-range cost factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    allow_empty_password: bool,
    password_field: String,
    rounds: u32,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            allow_empty_password: false,
            password_field: DEFAULT_PASSWORD_FIELD.to_string(),
            rounds: RECOMMENDED_ROUNDS,
        }
    }
}

impl PasswordOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_empty_password(mut self, allow: bool) -> Self {
        self.allow_empty_password = allow;
        self
    }

    pub fn with_password_field(mut self, field: impl Into<String>) -> Self {
        self.password_field = field.into();
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Read overrides from the process environment (and `.env`, loaded once).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    /// Keys the lookup does not know keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(field) = lookup(ENV_PASSWORD_FIELD) {
            options.password_field = field;
        }

        if let Some(value) = lookup(ENV_ALLOW_EMPTY) {
            options.allow_empty_password = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_ALLOW_EMPTY,
                        value,
                    });
                }
            };
        }

        if let Some(value) = lookup(ENV_ROUNDS) {
            options.rounds = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_ROUNDS,
                    value: value.clone(),
                })?;
        }

        Ok(options)
    }

    pub fn allow_empty_password(&self) -> bool {
        self.allow_empty_password
    }

    pub fn password_field(&self) -> &str {
        &self.password_field
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

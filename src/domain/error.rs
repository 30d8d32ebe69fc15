use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("{field} must not be empty")]
    EmptyPassword { field: String },

    #[error("bcrypt tried to hash another bcrypt hash (field `{field}`)")]
    DoubleHash { field: String },

    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Hashing worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("Field `{field}` does not hold a string value")]
    FieldType { field: String },

    #[error("Unknown password field `{0}`")]
    UnknownField(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure of a lifecycle hook; aborts the create/update it guards.
#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("Hook `{hook}` rejected the record: {reason}")]
    Rejected { hook: String, reason: String },
}

use crate::domain::error::PasswordError;

/// State of the password field on a record about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Not part of the record (or payload) at all.
    Absent,
    /// Explicit null.
    Null,
    Present(String),
}

impl FieldValue {
    /// The non-empty value, if any.
    pub fn secret(&self) -> Option<&str> {
        match self {
            FieldValue::Present(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => FieldValue::Present(value),
            None => FieldValue::Null,
        }
    }
}

/// Read/write access to the single field a password interceptor owns.
pub trait SecretField<R>: Send + Sync {
    /// Name of the field as it appears in an update payload.
    fn name(&self) -> &str;

    fn read(&self, record: &R) -> Result<FieldValue, PasswordError>;

    fn write(&self, record: &mut R, value: String) -> Result<(), PasswordError>;
}

/// Getter/setter pair for plain structs.
pub struct Accessor<R> {
    name: String,
    get: fn(&R) -> FieldValue,
    set: fn(&mut R, String),
}

impl<R> Accessor<R> {
    pub fn new(name: impl Into<String>, get: fn(&R) -> FieldValue, set: fn(&mut R, String)) -> Self {
        Self {
            name: name.into(),
            get,
            set,
        }
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get: self.get,
            set: self.set,
        }
    }
}

impl<R> SecretField<R> for Accessor<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self, record: &R) -> Result<FieldValue, PasswordError> {
        Ok((self.get)(record))
    }

    fn write(&self, record: &mut R, value: String) -> Result<(), PasswordError> {
        (self.set)(record, value);
        Ok(())
    }
}

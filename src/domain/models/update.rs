use std::collections::BTreeSet;

/// What kind of write an update is: a full replacement, or a patch carrying
/// only some fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateIntent {
    patch: bool,
    fields: BTreeSet<String>,
}

impl UpdateIntent {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn patch<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patch: true,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_patch(&self) -> bool {
        self.patch
    }

    /// Whether the update payload carries `field`. A full update carries every field.
    pub fn touches(&self, field: &str) -> bool {
        !self.patch || self.fields.contains(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Update,
}

/// Passed to every hook of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    entity: String,
    operation: Operation,
}

impl HookContext {
    pub fn new(entity: impl Into<String>, operation: Operation) -> Self {
        Self {
            entity: entity.into(),
            operation,
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}

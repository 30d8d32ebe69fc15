use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::HookError,
    models::update::{HookContext, UpdateIntent},
};

/// Work a record type runs before it is written.
///
/// Both events default to a no-op so a hook only implements what it needs.
#[async_trait]
pub trait LifecycleHook<R: Send>: Send + Sync {
    async fn before_insert(&self, _record: &mut R, _ctx: &HookContext) -> Result<(), HookError> {
        Ok(())
    }

    async fn before_update(
        &self,
        _record: &mut R,
        _intent: &UpdateIntent,
        _ctx: &HookContext,
    ) -> Result<(), HookError> {
        Ok(())
    }
}

/// Ordered hooks of one record type. Each hook is awaited before the next
/// starts, and the first error stops the chain.
pub struct HookChain<R: Send> {
    hooks: Vec<Arc<dyn LifecycleHook<R>>>,
}

impl<R: Send> HookChain<R> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn with(mut self, hook: impl LifecycleHook<R> + 'static) -> Self {
        self.push(hook);
        self
    }

    pub fn push(&mut self, hook: impl LifecycleHook<R> + 'static) {
        self.hooks.push(Arc::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub async fn before_insert(&self, record: &mut R, ctx: &HookContext) -> Result<(), HookError> {
        for hook in &self.hooks {
            hook.before_insert(record, ctx).await?;
        }
        Ok(())
    }

    pub async fn before_update(
        &self,
        record: &mut R,
        intent: &UpdateIntent,
        ctx: &HookContext,
    ) -> Result<(), HookError> {
        for hook in &self.hooks {
            hook.before_update(record, intent, ctx).await?;
        }
        Ok(())
    }
}

impl<R: Send> Default for HookChain<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Send> Clone for HookChain<R> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

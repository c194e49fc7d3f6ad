use crate::domain::errors::DomainResult;
use crate::domain::hooks::{HookChain, LifecycleHook};
use crate::domain::slug::RecordWriteRepository;
use std::sync::Arc;

/// Create/update path for one model type: run the hook chain, then persist.
pub struct RecordLifecycle<R: Send + 'static> {
    hooks: HookChain<R>,
    write_repo: Arc<dyn RecordWriteRepository<R>>,
}

impl<R: Send + 'static> RecordLifecycle<R> {
    #[must_use]
    pub fn new(write_repo: Arc<dyn RecordWriteRepository<R>>) -> Self {
        Self::with_hooks(write_repo, HookChain::new())
    }

    #[must_use]
    pub const fn with_hooks(
        write_repo: Arc<dyn RecordWriteRepository<R>>,
        hooks: HookChain<R>,
    ) -> Self {
        Self { hooks, write_repo }
    }

    /// Appends `hook` after the hooks already registered.
    pub fn register(&mut self, hook: Arc<dyn LifecycleHook<R>>) {
        self.hooks.register(hook);
    }

    #[must_use]
    pub const fn hooks(&self) -> &HookChain<R> {
        &self.hooks
    }

    /// # Errors
    ///
    /// The first hook error, in which case nothing is written, or the repository error.
    pub async fn create(&self, mut record: R) -> DomainResult<R> {
        self.hooks.run_before_create(&mut record)?;
        self.write_repo.insert(record).await
    }

    /// # Errors
    ///
    /// The first hook error, in which case nothing is written, or the repository error.
    pub async fn update(&self, mut record: R) -> DomainResult<R> {
        self.hooks.run_before_update(&mut record)?;
        self.write_repo.update(record).await
    }
}

// src/domain/hooks.rs
use crate::domain::errors::DomainResult;
use std::sync::Arc;

/// Logic run immediately before a record is persisted.
pub trait LifecycleHook<R>: Send + Sync {
    fn before_create(&self, _record: &mut R) -> DomainResult<()> {
        Ok(())
    }

    fn before_update(&self, _record: &mut R) -> DomainResult<()> {
        Ok(())
    }
}

/// Ordered hooks for one model type. Hooks run in registration order and the first
/// error aborts the rest.
pub struct HookChain<R> {
    hooks: Vec<Arc<dyn LifecycleHook<R>>>,
}

impl<R> Default for HookChain<R> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<R> Clone for HookChain<R> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

impl<R> HookChain<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn LifecycleHook<R>>) {
        self.hooks.push(hook);
    }

    #[must_use]
    pub fn with(mut self, hook: Arc<dyn LifecycleHook<R>>) -> Self {
        self.register(hook);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// # Errors
    ///
    /// The first error returned by a hook. Later hooks do not run.
    pub fn run_before_create(&self, record: &mut R) -> DomainResult<()> {
        for hook in &self.hooks {
            hook.before_create(record)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// The first error returned by a hook. Later hooks do not run.
    pub fn run_before_update(&self, record: &mut R) -> DomainResult<()> {
        for hook in &self.hooks {
            hook.before_update(record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    struct Push(&'static str);

    impl LifecycleHook<Vec<&'static str>> for Push {
        fn before_create(&self, record: &mut Vec<&'static str>) -> DomainResult<()> {
            record.push(self.0);
            Ok(())
        }

        fn before_update(&self, record: &mut Vec<&'static str>) -> DomainResult<()> {
            record.push(self.0);
            Ok(())
        }
    }

    struct Reject;

    impl LifecycleHook<Vec<&'static str>> for Reject {
        fn before_create(&self, _record: &mut Vec<&'static str>) -> DomainResult<()> {
            Err(DomainError::Validation("rejected".into()))
        }

        fn before_update(&self, _record: &mut Vec<&'static str>) -> DomainResult<()> {
            Err(DomainError::Validation("rejected".into()))
        }
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let chain = HookChain::<Vec<&'static str>>::new()
            .with(Arc::new(Push("first")))
            .with(Arc::new(Push("second")));
        let mut seen = Vec::new();

        chain.run_before_create(&mut seen).unwrap();
        assert_eq!(seen, vec!["first", "second"]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn first_error_stops_the_chain() {
        let chain = HookChain::<Vec<&'static str>>::new()
            .with(Arc::new(Push("before")))
            .with(Arc::new(Reject))
            .with(Arc::new(Push("never")));

        let mut seen = Vec::new();
        let err = chain.run_before_create(&mut seen).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(seen, vec!["before"]);

        let mut seen = Vec::new();
        let err = chain.run_before_update(&mut seen).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(seen, vec!["before"]);
    }

    #[test]
    fn update_runs_every_hook_in_order() {
        let chain = HookChain::<Vec<&'static str>>::new()
            .with(Arc::new(Push("first")))
            .with(Arc::new(Push("second")));
        let mut seen = Vec::new();

        chain.run_before_update(&mut seen).unwrap();
        assert_eq!(seen, vec!["first", "second"]);
    }

    #[test]
    fn empty_chain_is_a_no_op() {
        let chain: HookChain<Vec<&'static str>> = HookChain::default();
        let mut seen = Vec::new();
        chain.run_before_create(&mut seen).unwrap();
        chain.run_before_update(&mut seen).unwrap();
        assert!(chain.is_empty());
    }
}

// src/application/services.rs
use std::sync::Arc;

use crate::{
    application::{finder::SlugFinder, lifecycle::RecordLifecycle},
    domain::{
        errors::DomainResult,
        hooks::HookChain,
        slug::{
            AttributeRecord, RecordReadRepository, RecordWriteRepository, SlugPolicy,
            SluggableOptions, SluggableRecord,
        },
    },
};

/// A model type with slug support wired in.
///
/// Holds the policy, the create/update path with the policy registered as a hook, and
/// the lookups.
pub struct SluggableModel<R: Send + 'static> {
    pub policy: SlugPolicy<R>,
    pub lifecycle: RecordLifecycle<R>,
    pub finder: SlugFinder<R>,
}

impl<R: SluggableRecord> SluggableModel<R> {
    #[must_use]
    pub fn new(
        options: SluggableOptions<R>,
        read_repo: Arc<dyn RecordReadRepository<R>>,
        write_repo: Arc<dyn RecordWriteRepository<R>>,
    ) -> Self {
        Self::with_hooks(options, read_repo, write_repo, HookChain::new())
    }

    /// Like [`SluggableModel::new`], keeping `hooks` ahead of the slug policy.
    #[must_use]
    pub fn with_hooks(
        options: SluggableOptions<R>,
        read_repo: Arc<dyn RecordReadRepository<R>>,
        write_repo: Arc<dyn RecordWriteRepository<R>>,
        hooks: HookChain<R>,
    ) -> Self {
        let policy = SlugPolicy::new(options);
        let mut lifecycle = RecordLifecycle::with_hooks(write_repo, hooks);
        lifecycle.register(Arc::new(policy.clone()));
        let finder = SlugFinder::new(read_repo, &policy);

        tracing::debug!(
            source = policy.options().source(),
            slug_target = policy.options().target(),
            frozen = policy.options().frozen(),
            hooks = lifecycle.hooks().len(),
            "sluggable model configured"
        );

        Self {
            policy,
            lifecycle,
            finder,
        }
    }

    #[must_use]
    pub fn options(&self) -> &SluggableOptions<R> {
        self.policy.options()
    }

    /// Writes the target attribute through slug derivation.
    pub fn set_slug(&self, record: &mut R, raw: &str) {
        self.policy.assign_target(record, raw);
    }

    /// # Errors
    ///
    /// The first hook error, in which case nothing is written, or the repository error.
    pub async fn create(&self, record: R) -> DomainResult<R> {
        self.lifecycle.create(record).await
    }

    /// # Errors
    ///
    /// The first hook error, in which case nothing is written, or the repository error.
    pub async fn update(&self, record: R) -> DomainResult<R> {
        self.lifecycle.update(record).await
    }

    /// # Errors
    ///
    /// Propagates read repository failures.
    pub async fn find_by_pk_or_slug(
        &self,
        identifier: impl std::fmt::Display + Send,
    ) -> DomainResult<Option<R>> {
        self.finder.find_by_pk_or_slug(identifier).await
    }

    /// # Errors
    ///
    /// Propagates read repository failures.
    pub async fn find_by_slug(&self, identifier: &str) -> DomainResult<Option<R>> {
        self.finder.find_by_slug(identifier).await
    }
}

impl SluggableModel<AttributeRecord> {
    /// Writes one attribute. The slug target is derived like [`Self::set_slug`];
    /// `None` clears the attribute.
    pub fn set_attribute(&self, record: &mut AttributeRecord, name: &str, value: Option<&str>) {
        self.policy.assign_attribute(record, name, value);
    }

    /// Unsaved record with `attributes` written in order through [`Self::set_attribute`].
    #[must_use]
    pub fn build_record<'a>(
        &self,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> AttributeRecord {
        let mut record = AttributeRecord::new();
        for (name, value) in attributes {
            self.set_attribute(&mut record, name, Some(value));
        }
        record
    }
}

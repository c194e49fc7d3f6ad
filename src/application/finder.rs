use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::chomp;
use crate::domain::slug::{LookupKey, RecordReadRepository, SlugPolicy, SluggableRecord};
use std::fmt;
use std::sync::Arc;

/// Resolves records by primary key or by slug. Absence is `Ok(None)`.
pub struct SlugFinder<R: Send + 'static> {
    read_repo: Arc<dyn RecordReadRepository<R>>,
    target: String,
}

impl<R: SluggableRecord> SlugFinder<R> {
    #[must_use]
    pub fn new(read_repo: Arc<dyn RecordReadRepository<R>>, policy: &SlugPolicy<R>) -> Self {
        Self {
            read_repo,
            target: policy.options().target().to_string(),
        }
    }

    /// All-digit identifiers are primary keys; everything else is a slug.
    ///
    /// # Errors
    ///
    /// Propagates read repository failures.
    pub async fn find_by_pk_or_slug(
        &self,
        identifier: impl fmt::Display + Send,
    ) -> DomainResult<Option<R>> {
        match LookupKey::parse(&identifier.to_string()) {
            LookupKey::PrimaryKey(id) => {
                tracing::debug!(%id, "finding record by primary key");
                self.read_repo.find_by_pk(id).await
            }
            LookupKey::Slug(slug) => self.lookup_slug(&slug).await,
            LookupKey::Unresolvable => {
                tracing::debug!("identifier is not a usable primary key");
                Ok(None)
            }
        }
    }

    /// # Errors
    ///
    /// Propagates read repository failures.
    pub async fn find_by_slug(&self, identifier: &str) -> DomainResult<Option<R>> {
        self.lookup_slug(chomp(identifier)).await
    }

    async fn lookup_slug(&self, slug: &str) -> DomainResult<Option<R>> {
        tracing::debug!(slug, attribute = %self.target, "finding record by slug");
        self.read_repo.find_by_attribute(&self.target, slug).await
    }
}

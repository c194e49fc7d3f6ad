use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::RecordId;
use async_trait::async_trait;

#[async_trait]
pub trait RecordWriteRepository<R: Send + 'static>: Send + Sync {
    async fn insert(&self, record: R) -> DomainResult<R>;
    async fn update(&self, record: R) -> DomainResult<R>;
}

#[async_trait]
pub trait RecordReadRepository<R: Send + 'static>: Send + Sync {
    async fn find_by_pk(&self, id: RecordId) -> DomainResult<Option<R>>;
    /// First record whose `attribute` equals `value` exactly.
    async fn find_by_attribute(&self, attribute: &str, value: &str) -> DomainResult<Option<R>>;
}

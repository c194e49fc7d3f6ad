// tests/support/mocks/repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sluggable::{
    DomainError, DomainResult, RecordId, RecordReadRepository, RecordWriteRepository,
    SluggableRecord,
};

/// Records the in-memory repository can assign primary keys to.
pub trait Keyed {
    fn id(&self) -> Option<RecordId>;
    fn set_id(&mut self, id: RecordId);
}

/* -------------------------------- InMemoryRepo -------------------------------- */

/// In-memory table keyed by primary key, standing in for the host database.
pub struct InMemoryRepo<R> {
    rows: Mutex<BTreeMap<i64, R>>,
}

impl<R> Default for InMemoryRepo<R> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<R: Clone> InMemoryRepo<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<R> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl<R> RecordWriteRepository<R> for InMemoryRepo<R>
where
    R: SluggableRecord + Keyed + Clone,
{
    async fn insert(&self, mut record: R) -> DomainResult<R> {
        let mut rows = self.rows.lock().unwrap();
        let next = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let id = record.id().unwrap_or(RecordId(next));
        if rows.contains_key(&id.0) {
            return Err(DomainError::Conflict(format!("id {id} already exists")));
        }
        record.set_id(id);
        rows.insert(id.0, record.clone());
        drop(rows);
        Ok(record)
    }

    async fn update(&self, record: R) -> DomainResult<R> {
        let id = record
            .id()
            .ok_or_else(|| DomainError::Validation("record has no primary key".into()))?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound(format!("record {id} not found")))?;
        *row = record.clone();
        drop(rows);
        Ok(record)
    }
}

#[async_trait]
impl<R> RecordReadRepository<R> for InMemoryRepo<R>
where
    R: SluggableRecord + Keyed + Clone,
{
    async fn find_by_pk(&self, id: RecordId) -> DomainResult<Option<R>> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_attribute(&self, attribute: &str, value: &str) -> DomainResult<Option<R>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|row| row.attribute(attribute) == Some(value))
            .cloned())
    }
}

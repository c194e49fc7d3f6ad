// tests/support/helpers.rs
use std::sync::Arc;

use sluggable::infrastructure::database;
use sluggable::{
    AttributeRecord, RecordReadRepository, RecordWriteRepository, SluggableModel,
    SluggableOptions, SqliteRecordRepository, StoreConfig,
};
use sqlx::SqlitePool;

use super::mocks::{InMemoryRepo, Item};

pub fn item_model(options: SluggableOptions<Item>) -> (SluggableModel<Item>, Arc<InMemoryRepo<Item>>) {
    sluggable::telemetry::init_tracing();
    let repo = Arc::new(InMemoryRepo::<Item>::new());
    let read: Arc<dyn RecordReadRepository<Item>> = repo.clone();
    let write: Arc<dyn RecordWriteRepository<Item>> = repo.clone();
    (SluggableModel::new(options, read, write), repo)
}

pub fn item_options(target: &str) -> SluggableOptions<Item> {
    SluggableOptions::builder()
        .source("name")
        .target(target)
        .build()
        .expect("valid options")
}

/// Fresh in-memory database with an `items` table.
pub async fn items_pool() -> Arc<SqlitePool> {
    sluggable::telemetry::init_tracing();
    let pool = database::init_pool(&StoreConfig::default())
        .await
        .expect("init pool");
    sqlx::query(
        "CREATE TABLE items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            slug TEXT,
            sluggie TEXT
        )",
    )
    .execute(&pool)
    .await
    .expect("create items table");
    Arc::new(pool)
}

pub async fn sqlite_model(
    options: SluggableOptions<AttributeRecord>,
) -> (SluggableModel<AttributeRecord>, Arc<SqlitePool>) {
    let pool = items_pool().await;
    let repo = Arc::new(
        SqliteRecordRepository::new(Arc::clone(&pool), "items", ["name", "slug", "sluggie"])
            .expect("valid table"),
    );
    let read: Arc<dyn RecordReadRepository<AttributeRecord>> = repo.clone();
    let write: Arc<dyn RecordWriteRepository<AttributeRecord>> = repo;
    (SluggableModel::new(options, read, write), pool)
}

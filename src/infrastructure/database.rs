use crate::config::StoreConfig;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// # Errors
///
/// Returns the sqlx error when the database cannot be opened.
pub async fn init_pool(config: &StoreConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections())
        .connect(config.database_url())
        .await?;

    tracing::info!(
        max_connections = config.max_connections(),
        "sqlite pool ready"
    );
    Ok(pool)
}

use persistence::db::{DatabaseConfig, create_sqlite_pool, init_collections};
use sqlx::SqlitePool;
use std::env;

/// Opens the local store and creates the record collections.
///
/// Environment variables:
/// - MEGAMART_DB_PATH: SQLite file path (defaults to `megamart.db`)
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let path = env::var("MEGAMART_DB_PATH").unwrap_or_else(|_| "megamart.db".to_string());
    let pool = create_sqlite_pool(&DatabaseConfig::new(path)).await?;
    init_collections(&pool).await?;
    Ok(pool)
}

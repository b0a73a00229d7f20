use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.schema_error")]
    SchemaError,
}

/// Configuration for the local SQLite store
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(path: String) -> Self {
        Self {
            path,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Single-connection in-memory database, used by tests.
    pub fn in_memory() -> Self {
        Self {
            path: ":memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a SQLite connection pool, creating the database file if needed
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::new()
        .filename(Path::new(&config.path))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Creates the four record collections if they do not exist yet, the
/// same way the storefront creates its object stores on first open.
pub async fn init_collections(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let statements = [
        r#"CREATE TABLE IF NOT EXISTS cart_items (
            id TEXT PRIMARY KEY,
            product_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            price REAL NOT NULL,
            image TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            added_at TEXT NOT NULL
        )"#,
        r#"CREATE TABLE IF NOT EXISTS orders (
            id TEXT PRIMARY KEY,
            items TEXT NOT NULL,
            total_amount REAL NOT NULL,
            shipping_address TEXT NOT NULL,
            payment_method TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )"#,
        r#"CREATE TABLE IF NOT EXISTS wishlist_items (
            id TEXT PRIMARY KEY,
            product_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            price REAL NOT NULL,
            image TEXT NOT NULL,
            added_at TEXT NOT NULL
        )"#,
        r#"CREATE TABLE IF NOT EXISTS auth_session (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            email TEXT NOT NULL,
            name TEXT NOT NULL,
            login_time TEXT NOT NULL
        )"#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|_| DatabaseError::SchemaError)?;
    }

    Ok(())
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = create_sqlite_pool(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory pool");
    init_collections(&pool).await.expect("schema");
    pool
}

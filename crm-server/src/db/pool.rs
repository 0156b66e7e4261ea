//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The store location
//! is always passed in by the caller.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Store used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://agency.db";

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a writer waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool, creating the file if it is missing.
///
/// Accepts `sqlite://` URLs, `sqlite::memory:`, or a bare file path.
///
/// # Errors
///
/// Returns an error if the location can't be parsed or opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://agency.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    if is_memory(database_url) {
        return create_memory_pool().await;
    }

    let options = connect_options(database_url)?;
    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Create an in-memory pool.
///
/// Every SQLite memory connection is its own database, so the pool is pinned
/// to a single connection that is never recycled.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

fn is_memory(database_url: &str) -> bool {
    matches!(database_url, "sqlite::memory:" | ":memory:" | "sqlite://:memory:")
}

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    let options = if database_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(database_url)?
    } else {
        SqliteConnectOptions::new().filename(database_url)
    };

    Ok(options.create_if_missing(true).busy_timeout(BUSY_TIMEOUT))
}

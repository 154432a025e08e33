//! # Database Persistence Layer
//!
//! SQLite persistence for version records via SQLx.
//!
//! ## Architecture
//!
//! One file, one table (`app_versions`). On startup [`bootstrap`] creates
//! the table if it is absent and inserts the seed rows when it is empty.
//! There are no migrations: the schema is fixed.
//!
//! Each operation acquires a pooled connection (or a transaction) for its
//! own duration; both are returned on drop, so error paths cannot leak a
//! connection or leave a transaction open.

pub mod schema;
pub mod seed;
pub mod versions;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 5;

/// Open (creating if missing) the SQLite database at `path`.
///
/// The parent directory is created as well, so a fresh deployment only
/// needs a writable location.
pub async fn init_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        // Writers queue behind each other instead of failing with SQLITE_BUSY.
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    tracing::info!(path = %path.display(), "Connected to SQLite");
    Ok(pool)
}

/// Open a private in-memory database.
///
/// Limited to one connection: every new in-memory connection would
/// otherwise see its own empty database.
pub async fn init_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Ensure the schema exists and seed an empty table.
pub async fn bootstrap(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    schema::ensure(pool).await?;
    let seeded = seed::seed_if_empty(pool).await?;
    if seeded > 0 {
        tracing::info!(rows = seeded, "Inserted seed versions into empty store");
    }
    tracing::info!("Database initialized");
    Ok(())
}

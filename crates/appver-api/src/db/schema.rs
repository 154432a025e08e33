//! Table definition for `app_versions`.

use sqlx::SqlitePool;

/// `AUTOINCREMENT` keeps ids from being reused after a delete.
const CREATE_APP_VERSIONS: &str = "CREATE TABLE IF NOT EXISTS app_versions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    version TEXT NOT NULL,
    os_type TEXT NOT NULL,
    release_type TEXT NOT NULL,
    status TEXT NOT NULL,
    description TEXT,
    progress_summary TEXT,
    qa_date TEXT,
    submission_date TEXT,
    live_date TEXT,
    release_notes TEXT,
    remarks TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Create the table if it does not exist. Idempotent.
pub async fn ensure(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_APP_VERSIONS).execute(pool).await?;
    Ok(())
}

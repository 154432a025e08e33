//! Version record persistence operations.
//!
//! Functions take a `&SqlitePool` (or any SQLite executor, for use inside
//! a transaction) and operate on the `app_versions` table.
//!
//! Ordering is `version DESC` under SQLite's BINARY collation, i.e. plain
//! string comparison: `"v2.2.0"` sorts above `"v2.10.0"`. Ties on the
//! version label fall back to insertion order.

use chrono::{DateTime, Utc};
use sqlx::{SqliteExecutor, SqlitePool};

use appver_core::{OsFilter, VersionDraft, VersionRecord};

macro_rules! select_versions {
    ($tail:literal) => {
        concat!(
            "SELECT id, version, os_type, release_type, status, description,
             progress_summary, qa_date, submission_date, live_date,
             release_notes, remarks, created_at, updated_at
             FROM app_versions ",
            $tail
        )
    };
}

const RETURNING_COLUMNS: &str = "RETURNING id, version, os_type, release_type, status, description,
     progress_summary, qa_date, submission_date, live_date,
     release_notes, remarks, created_at, updated_at";

/// List versions matching `filter`, newest label first.
pub async fn list(pool: &SqlitePool, filter: OsFilter) -> Result<Vec<VersionRecord>, sqlx::Error> {
    let rows = match filter.os_types() {
        Some([primary, dual]) => {
            sqlx::query_as::<_, VersionRow>(select_versions!(
                "WHERE os_type IN (?1, ?2) ORDER BY version DESC, id ASC"
            ))
            .bind(primary)
            .bind(dual)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, VersionRow>(select_versions!("ORDER BY version DESC, id ASC"))
                .fetch_all(pool)
                .await?
        }
    };

    Ok(rows.into_iter().map(VersionRow::into_record).collect())
}

/// Fetch a version by ID.
pub async fn get_by_id<'e, E>(executor: E, id: i64) -> Result<Option<VersionRecord>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, VersionRow>(select_versions!("WHERE id = ?1"))
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(VersionRow::into_record))
}

/// Number of stored versions.
pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM app_versions")
        .fetch_one(executor)
        .await
}

/// Insert a new version stamped with `now` for both timestamps and return
/// the stored row.
pub async fn insert<'e, E>(
    executor: E,
    draft: &VersionDraft,
    now: DateTime<Utc>,
) -> Result<VersionRecord, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO app_versions
         (version, os_type, release_type, status, description, progress_summary,
          qa_date, submission_date, live_date, release_notes, remarks, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)
         {RETURNING_COLUMNS}"
    );

    let row = bind_draft(sqlx::query_as::<_, VersionRow>(&sql), draft)
        .bind(now)
        .fetch_one(executor)
        .await?;

    Ok(row.into_record())
}

/// Overwrite every editable field of version `id` and refresh `updated_at`.
///
/// Returns `None` without writing anything when the version does not
/// exist. The existence check and the write share one transaction.
/// Concurrent updates to the same row are last-write-wins.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    draft: &VersionDraft,
    now: DateTime<Utc>,
) -> Result<Option<VersionRecord>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if !exists(&mut *tx, id).await? {
        return Ok(None);
    }

    let sql = format!(
        "UPDATE app_versions SET
            version = ?1, os_type = ?2, release_type = ?3, status = ?4,
            description = ?5, progress_summary = ?6, qa_date = ?7,
            submission_date = ?8, live_date = ?9, release_notes = ?10,
            remarks = ?11, updated_at = ?12
         WHERE id = ?13
         {RETURNING_COLUMNS}"
    );

    let row = bind_draft(sqlx::query_as::<_, VersionRow>(&sql), draft)
        .bind(now)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(Some(row.into_record()))
}

/// Permanently delete version `id`. Returns `false` when it does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if !exists(&mut *tx, id).await? {
        return Ok(false);
    }

    sqlx::query("DELETE FROM app_versions WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(true)
}

async fn exists<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM app_versions WHERE id = ?1")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(found.is_some())
}

type VersionQuery<'q> =
    sqlx::query::QueryAs<'q, sqlx::Sqlite, VersionRow, sqlx::sqlite::SqliteArguments<'q>>;

/// Bind the eleven draft columns as parameters `?1..?11`.
fn bind_draft<'q>(query: VersionQuery<'q>, draft: &'q VersionDraft) -> VersionQuery<'q> {
    query
        .bind(&draft.version)
        .bind(&draft.os_type)
        .bind(&draft.release_type)
        .bind(&draft.status)
        .bind(&draft.description)
        .bind(&draft.progress_summary)
        .bind(&draft.qa_date)
        .bind(&draft.submission_date)
        .bind(&draft.live_date)
        .bind(&draft.release_notes)
        .bind(&draft.remarks)
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct VersionRow {
    id: i64,
    version: String,
    os_type: String,
    release_type: String,
    status: String,
    description: Option<String>,
    progress_summary: Option<String>,
    qa_date: Option<String>,
    submission_date: Option<String>,
    live_date: Option<String>,
    release_notes: Option<String>,
    remarks: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VersionRow {
    fn into_record(self) -> VersionRecord {
        let draft = VersionDraft {
            version: self.version,
            os_type: self.os_type,
            release_type: self.release_type,
            status: self.status,
            description: self.description,
            progress_summary: self.progress_summary,
            qa_date: self.qa_date,
            submission_date: self.submission_date,
            live_date: self.live_date,
            release_notes: self.release_notes,
            remarks: self.remarks,
        };
        VersionRecord::from_draft(self.id, draft, self.created_at, self.updated_at)
    }
}

//! Seed data insertion.

use chrono::Utc;
use sqlx::SqlitePool;

use appver_core::seed::seed_drafts;

use crate::db::versions;

/// Insert the seed versions if the table is empty. Returns the number of
/// rows inserted (0 or 3).
///
/// The count and the inserts share one transaction, so two processes
/// booting against the same fresh file cannot both seed it.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing = versions::count(&mut *tx).await?;
    if existing > 0 {
        return Ok(0);
    }

    let now = Utc::now();
    let drafts = seed_drafts();
    for draft in &drafts {
        versions::insert(&mut *tx, draft, now).await?;
    }
    tx.commit().await?;

    Ok(drafts.len())
}

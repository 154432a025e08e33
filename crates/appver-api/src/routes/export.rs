//! # Export API
//!
//! The spreadsheet export: every version, in list order, as a header row
//! plus one eleven-cell row per version.
//!
//! - `GET /api/export` — `{"data": [[header...], [row...], ...]}`
//! - `GET /api/export/csv` — the same table as a CSV download

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use appver_core::{ExportTable, OsFilter};

use crate::db;
use crate::error::AppError;
use crate::state::AppState;

const CSV_FILENAME_PREFIX: &str = "APP版號管理報表";

/// Build the export router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/export", get(export_versions))
        .route("/api/export/csv", get(export_versions_csv))
}

async fn load_table(state: &AppState) -> Result<ExportTable, AppError> {
    let records = db::versions::list(&state.db_pool, OsFilter::All)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to load versions for export");
            AppError::from(e)
        })?;
    Ok(ExportTable::from_records(&records))
}

/// Download name for the CSV export, e.g. `APP版號管理報表_20250101.csv`.
fn csv_filename(date: &str) -> String {
    format!("{CSV_FILENAME_PREFIX}_{date}.csv")
}

/// `Content-Disposition` for the CSV download. The UTF-8 name goes in
/// `filename*` (RFC 5987); `filename` carries an ASCII fallback.
fn content_disposition(date: &str) -> String {
    format!(
        "attachment; filename=\"app_versions_{date}.csv\"; filename*=UTF-8''{}",
        encode_rfc5987(&csv_filename(date))
    )
}

/// Percent-encode everything outside RFC 5987 `attr-char`.
fn encode_rfc5987(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// GET /api/export — Export all versions as a table.
#[utoipa::path(
    get,
    path = "/api/export",
    responses(
        (status = 200, description = "Header row followed by one row per version", body = ExportTable),
    ),
    tag = "export"
)]
async fn export_versions(State(state): State<AppState>) -> Result<Json<ExportTable>, AppError> {
    let table = load_table(&state).await?;
    tracing::debug!(rows = table.rows().len(), "export generated");
    Ok(Json(table))
}

/// GET /api/export/csv — Export all versions as a CSV file.
#[utoipa::path(
    get,
    path = "/api/export/csv",
    responses(
        (status = 200, description = "UTF-8 CSV with BOM", body = String, content_type = "text/csv"),
    ),
    tag = "export"
)]
async fn export_versions_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let table = load_table(&state).await?;
    let disposition = content_disposition(&Utc::now().format("%Y%m%d").to_string());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        table.to_csv(),
    ))
}

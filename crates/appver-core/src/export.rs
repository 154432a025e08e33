//! # Export Table
//!
//! Reshapes records into the fixed eleven-column table used by the
//! spreadsheet export: one header row of labels, then one row per record.
//! Every cell is a string; absent optional fields become `""`.

use serde::Serialize;

use crate::record::VersionRecord;

/// Column labels, in output order.
///
/// Columns: version, release_type, status, os_type, description, qa_date,
/// submission_date, live_date, release_notes, progress_summary, remarks.
pub const EXPORT_HEADERS: [&str; 11] = [
    "版號",
    "類型",
    "狀態",
    "作業系統",
    "更新功能描述",
    "測試時間",
    "送審時間",
    "完成上線時間",
    "送審文案",
    "現在進度說明",
    "其他備註",
];

/// UTF-8 byte order mark, so spreadsheet tools detect the encoding.
const UTF8_BOM: &str = "\u{feff}";

/// Header row plus one row per record, serialized as `{"data": [[...], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExportTable {
    /// Rows; the first is always [`EXPORT_HEADERS`].
    pub data: Vec<Vec<String>>,
}

impl ExportTable {
    /// Build the table from records, keeping their order.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a VersionRecord>,
    {
        let header = EXPORT_HEADERS.iter().map(|h| h.to_string()).collect();
        let data = std::iter::once(header)
            .chain(records.into_iter().map(|r| export_row(r).to_vec()))
            .collect();
        Self { data }
    }

    /// Data rows, without the header.
    pub fn rows(&self) -> &[Vec<String>] {
        self.data.get(1..).unwrap_or_default()
    }

    /// Render as CSV with a leading BOM and CRLF line endings.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(UTF8_BOM);
        for row in &self.data {
            let line: Vec<String> = row.iter().map(|cell| csv_field(cell)).collect();
            out.push_str(&line.join(","));
            out.push_str("\r\n");
        }
        out
    }
}

/// One record as eleven cells in [`EXPORT_HEADERS`] order.
pub fn export_row(record: &VersionRecord) -> [String; 11] {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        record.version.clone(),
        record.release_type.clone(),
        record.status.clone(),
        record.os_type.clone(),
        opt(&record.description),
        opt(&record.qa_date),
        opt(&record.submission_date),
        opt(&record.live_date),
        opt(&record.release_notes),
        opt(&record.progress_summary),
        opt(&record.remarks),
    ]
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(cell: &str) -> String {
    if cell.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

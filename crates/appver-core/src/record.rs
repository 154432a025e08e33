//! # Version Records
//!
//! [`VersionDraft`] is what clients send on create and update;
//! [`VersionRecord`] is what the store hands back, with the system-assigned
//! `id` and timestamps added.
//!
//! Updates are full overwrites: the draft replaces every mutable field, so
//! an optional field omitted from an update payload is cleared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Create/update payload: every record field except the system-assigned ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VersionDraft {
    /// Version label, e.g. `v1.2.3`. Not required to be unique.
    pub version: String,
    /// `iOS`, `Android` or `雙系統` by convention.
    pub os_type: String,
    /// Release category: `Bug修復`, `新增功能`, `新增功能&功能修復`.
    pub release_type: String,
    /// Lifecycle label: `確認要釋出的項目中`, `開發中`, `User測試中`, `送審中`, `完成上線`.
    pub status: String,
    /// Feature description.
    #[serde(default)]
    pub description: Option<String>,
    /// Current progress notes.
    #[serde(default)]
    pub progress_summary: Option<String>,
    /// QA date, free-form.
    #[serde(default)]
    pub qa_date: Option<String>,
    /// Store submission date, free-form.
    #[serde(default)]
    pub submission_date: Option<String>,
    /// Go-live date, free-form.
    #[serde(default)]
    pub live_date: Option<String>,
    /// Store submission copy.
    #[serde(default)]
    pub release_notes: Option<String>,
    /// Anything else.
    #[serde(default)]
    pub remarks: Option<String>,
}

impl VersionDraft {
    /// Check that no required field is blank. Lengths are unbounded;
    /// optional fields and date strings are not interpreted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("version", &self.version),
            ("os_type", &self.os_type),
            ("release_type", &self.release_type),
            ("status", &self.status),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}

/// A persisted release version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VersionRecord {
    /// Store-assigned identifier. Never reused.
    pub id: i64,
    /// Version label, e.g. `v1.2.3`.
    pub version: String,
    /// `iOS`, `Android` or `雙系統` by convention.
    pub os_type: String,
    /// Release category.
    pub release_type: String,
    /// Lifecycle label.
    pub status: String,
    /// Feature description.
    pub description: Option<String>,
    /// Current progress notes.
    pub progress_summary: Option<String>,
    /// QA date, free-form.
    pub qa_date: Option<String>,
    /// Store submission date, free-form.
    pub submission_date: Option<String>,
    /// Go-live date, free-form.
    pub live_date: Option<String>,
    /// Store submission copy.
    pub release_notes: Option<String>,
    /// Anything else.
    pub remarks: Option<String>,
    /// Set once at insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

impl VersionRecord {
    /// Assemble a record from a draft and the store-assigned fields.
    pub fn from_draft(
        id: i64,
        draft: VersionDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            version: draft.version,
            os_type: draft.os_type,
            release_type: draft.release_type,
            status: draft.status,
            description: draft.description,
            progress_summary: draft.progress_summary,
            qa_date: draft.qa_date,
            submission_date: draft.submission_date,
            live_date: draft.live_date,
            release_notes: draft.release_notes,
            remarks: draft.remarks,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VersionDraft {
        VersionDraft {
            version: "v1.2.3".to_string(),
            os_type: "iOS".to_string(),
            release_type: "Bug修復".to_string(),
            status: "開發中".to_string(),
            description: None,
            progress_summary: None,
            qa_date: None,
            submission_date: None,
            live_date: None,
            release_notes: None,
            remarks: None,
        }
    }

    #[test]
    fn minimal_draft_is_valid() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut d = draft();
        d.status = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::EmptyField("status")));

        let mut d = draft();
        d.version = String::new();
        assert_eq!(d.validate(), Err(ValidationError::EmptyField("version")));
    }

    #[test]
    fn long_required_fields_are_accepted() {
        let mut d = draft();
        d.release_type = "x".repeat(4096);
        d.status = "開".repeat(1000);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn optional_fields_are_not_interpreted() {
        let mut d = draft();
        d.qa_date = Some("next tuesday-ish".to_string());
        d.remarks = Some(String::new());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let json = r#"{"version":"v1.0.0","os_type":"iOS","release_type":"Bug修復"}"#;
        assert!(serde_json::from_str::<VersionDraft>(json).is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{"version":"v1.0.0","os_type":"iOS","release_type":"Bug修復","status":"開發中","extra":1}"#;
        let d: VersionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.description, None);
        assert_eq!(d.live_date, None);
    }

    #[test]
    fn record_keeps_draft_fields() {
        let now = Utc::now();
        let mut d = draft();
        d.remarks = Some("note".to_string());
        let record = VersionRecord::from_draft(7, d.clone(), now, now);
        assert_eq!(record.id, 7);
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.version, d.version);
        assert_eq!(record.status, d.status);
        assert_eq!(record.remarks.as_deref(), Some("note"));
        assert_eq!(record.description, None);
    }

    #[test]
    fn record_serializes_nulls_for_absent_optionals() {
        let now = Utc::now();
        let record = VersionRecord::from_draft(1, draft(), now, now);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["description"].is_null());
        assert_eq!(value["version"], "v1.2.3");
        assert!(value["created_at"].is_string());
    }
}

//! # Validation Errors
//!
//! Structured errors for payloads and query parameters, built with
//! `thiserror`. Each variant carries the offending field or value so the
//! API layer can return it verbatim in a 422 response.

use thiserror::Error;

/// A request payload or query parameter failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or whitespace-only.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A strict platform filter parse got something other than `ios`,
    /// `android` or `all`.
    #[error("unknown os_filter \"{0}\" (expected ios, android or all)")]
    UnknownOsFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            ValidationError::EmptyField("version").to_string(),
            "version must not be empty"
        );
    }

    #[test]
    fn unknown_filter_echoes_value() {
        let err = ValidationError::UnknownOsFilter("windows".into());
        assert!(err.to_string().contains("windows"));
    }
}

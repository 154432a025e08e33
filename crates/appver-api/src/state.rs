//! # Application State
//!
//! Configuration and shared state for the Axum application. The state is
//! cloned into every handler; the SQLite pool inside it is reference-counted.

use std::path::PathBuf;

use sqlx::SqlitePool;
use thiserror::Error;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8321;
/// Default SQLite database file.
pub const DEFAULT_DATABASE_PATH: &str = "data/app_versions.db";
/// Password used when none is configured. Startup logs a warning.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Application configuration, built once at startup.
///
/// Custom `Debug` redacts the `admin_password` to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Path of the SQLite database file. Created on first boot.
    pub database_path: PathBuf,
    /// Secret checked by `POST /api/auth`.
    pub admin_password: String,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl AppConfig {
    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_password.is_empty() {
            return Err(ConfigError::EmptyAdminPassword);
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }
        Ok(())
    }

    /// Whether the built-in development password is in use.
    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("database_path", &self.database_path)
            .field("admin_password", &"[REDACTED]")
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            log_json: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("admin password must not be empty")]
    EmptyAdminPassword,
    #[error("database path must not be empty")]
    EmptyDatabasePath,
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db_pool: SqlitePool,
}

impl AppState {
    /// Create state from a configuration and an already bootstrapped pool.
    pub fn new(config: AppConfig, db_pool: SqlitePool) -> Self {
        Self { config, db_pool }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.port, 8321);
        assert!(config.uses_default_password());
    }

    #[test]
    fn empty_password_is_rejected() {
        let config = AppConfig {
            admin_password: String::new(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyAdminPassword)
        ));
    }

    #[test]
    fn empty_database_path_is_rejected() {
        let config = AppConfig {
            database_path: PathBuf::new(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyDatabasePath)
        ));
    }

    #[test]
    fn debug_redacts_password() {
        let config = AppConfig {
            admin_password: "hunter2".to_string(),
            ..AppConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}

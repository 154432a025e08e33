//! # appver-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the release version tracker.
//! Every setting can come from a flag or its environment variable.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use appver_api::state::{
    AppConfig, AppState, DEFAULT_ADMIN_PASSWORD, DEFAULT_DATABASE_PATH, DEFAULT_PORT,
};

/// B2B-APP version tracker API server.
#[derive(Parser, Debug)]
#[command(name = "appver-api", version, about, long_about = None)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// SQLite database file. Created, with its directory, on first boot.
    #[arg(long, env = "DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH)]
    database_path: PathBuf,

    /// Password accepted by `POST /api/auth`.
    #[arg(
        long,
        env = "ADMIN_PASSWORD",
        default_value = DEFAULT_ADMIN_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    admin_password: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            database_path: cli.database_path,
            admin_password: cli.admin_password,
            log_json: cli.log_json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from(Cli::parse());

    // Initialize structured tracing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.validate().map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        e
    })?;
    if config.uses_default_password() {
        tracing::warn!("ADMIN_PASSWORD is not set; using the built-in default password");
    }
    tracing::debug!(?config, "Configuration loaded");

    let db_pool = appver_api::db::init_pool(&config.database_path)
        .await
        .map_err(|e| {
            tracing::error!("Database initialization failed: {e}");
            e
        })?;
    appver_api::db::bootstrap(&db_pool).await.map_err(|e| {
        tracing::error!("Database bootstrap failed: {e}");
        e
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, db_pool.clone());
    let app = appver_api::app(state);

    tracing::info!("appver-api listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

//! # appver-api — Axum API Service
//!
//! HTTP service for the B2B-APP release version tracker, built on
//! Axum/Tower/Tokio with SQLite persistence through SQLx.
//!
//! ## Routes
//!
//! - `GET /` — service info
//! - `POST /api/auth` — admin password check
//! - `/api/versions/*` — version CRUD with platform filtering
//! - `/api/export/*` — spreadsheet export (JSON table and CSV)
//! - `/api/openapi.json` — generated OpenAPI document
//! - `/health/*` — liveness and readiness probes
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CorsLayer → DefaultBodyLimit → Handler
//!
//! ## Crate Policy
//!
//! - Domain types, validation and export formatting live in `appver-core`.
//! - All SQL lives in [`db`]; handlers never build queries.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod auth;
pub mod db;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// Request bodies larger than this are rejected with 413.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .merge(auth::router())
        .merge(routes::versions::router())
        .merge(routes::export::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    // Health probes sit outside the body limit; they take no body.
    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(middleware::cors::layer())
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    docs: &'static str,
}

/// GET / — service name, build version and where the API docs live.
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "B2B-APP 版本管理系統 API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/api/openapi.json",
    })
}

/// Liveness probe — the process is up and serving HTTP.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the database answers a trivial query.
///
/// Returns 200 "ready" or 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.db_pool).await {
        tracing::warn!("Database health check failed: {e}");
        return (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}

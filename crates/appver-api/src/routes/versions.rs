//! # Version API
//!
//! CRUD over release versions.
//!
//! ## Endpoints
//!
//! - `GET /api/versions?os_filter=` — list, optionally narrowed by platform
//! - `POST /api/versions` — create
//! - `GET /api/versions/:id` — fetch one
//! - `PUT /api/versions/:id` — full overwrite
//! - `DELETE /api/versions/:id` — hard delete

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use appver_core::{OsFilter, VersionDraft, VersionRecord};

use crate::db;
use crate::error::AppError;
use crate::extractors::{extract_path, extract_query, extract_validated_json};
use crate::state::AppState;

const MSG_DELETED: &str = "版本已成功刪除";

/// Query parameters for listing versions.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListVersionsQuery {
    /// `ios`, `android` or `all`. Absent or unrecognised means `all`.
    pub os_filter: Option<String>,
}

/// Confirmation returned by delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

/// Build the versions router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/versions", get(list_versions).post(create_version))
        .route(
            "/api/versions/:id",
            get(get_version).put(update_version).delete(delete_version),
        )
}

/// GET /api/versions — List versions, label descending.
#[utoipa::path(
    get,
    path = "/api/versions",
    params(ListVersionsQuery),
    responses(
        (status = 200, description = "Versions, ordered by label descending", body = Vec<VersionRecord>),
    ),
    tag = "versions"
)]
async fn list_versions(
    State(state): State<AppState>,
    query: Result<Query<ListVersionsQuery>, QueryRejection>,
) -> Result<Json<Vec<VersionRecord>>, AppError> {
    let query = extract_query(query)?;
    let filter = OsFilter::from_query(query.os_filter.as_deref());

    let versions = db::versions::list(&state.db_pool, filter)
        .await
        .map_err(|e| {
            tracing::error!(os_filter = %filter, error = %e, "failed to list versions");
            AppError::from(e)
        })?;

    Ok(Json(versions))
}

/// POST /api/versions — Create a version.
#[utoipa::path(
    post,
    path = "/api/versions",
    request_body = VersionDraft,
    responses(
        (status = 201, description = "Version created", body = VersionRecord),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "versions"
)]
async fn create_version(
    State(state): State<AppState>,
    body: Result<Json<VersionDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<VersionRecord>), AppError> {
    let draft = extract_validated_json(body)?;

    let record = db::versions::insert(&state.db_pool, &draft, Utc::now())
        .await
        .map_err(|e| {
            tracing::error!(version = %draft.version, error = %e, "failed to create version");
            AppError::from(e)
        })?;

    tracing::info!(id = record.id, version = %record.version, "version created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/versions/:id — Fetch a version.
#[utoipa::path(
    get,
    path = "/api/versions/{id}",
    params(("id" = i64, Path, description = "Version ID")),
    responses(
        (status = 200, description = "Version found", body = VersionRecord),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "versions"
)]
async fn get_version(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<VersionRecord>, AppError> {
    let id = extract_path(id)?;

    db::versions::get_by_id(&state.db_pool, id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "failed to fetch version");
            AppError::from(e)
        })?
        .map(Json)
        .ok_or_else(|| AppError::version_not_found(id))
}

/// PUT /api/versions/:id — Replace every editable field of a version.
#[utoipa::path(
    put,
    path = "/api/versions/{id}",
    params(("id" = i64, Path, description = "Version ID")),
    request_body = VersionDraft,
    responses(
        (status = 200, description = "Version updated", body = VersionRecord),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "versions"
)]
async fn update_version(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<VersionDraft>, JsonRejection>,
) -> Result<Json<VersionRecord>, AppError> {
    let id = extract_path(id)?;
    let draft = extract_validated_json(body)?;

    let record = db::versions::update(&state.db_pool, id, &draft, Utc::now())
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "failed to update version");
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::version_not_found(id))?;

    tracing::info!(id, version = %record.version, "version updated");
    Ok(Json(record))
}

/// DELETE /api/versions/:id — Permanently delete a version.
#[utoipa::path(
    delete,
    path = "/api/versions/{id}",
    params(("id" = i64, Path, description = "Version ID")),
    responses(
        (status = 200, description = "Version deleted", body = DeleteResponse),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "versions"
)]
async fn delete_version(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = extract_path(id)?;

    let deleted = db::versions::delete(&state.db_pool, id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "failed to delete version");
            AppError::from(e)
        })?;
    if !deleted {
        return Err(AppError::version_not_found(id));
    }

    tracing::info!(id, "version deleted");
    Ok(Json(DeleteResponse {
        message: MSG_DELETED.to_string(),
    }))
}

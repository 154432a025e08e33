//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/api/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "B2B-APP Version Tracker API",
        description = "Internal tracker for iOS/Android release versions: version CRUD with platform filtering, spreadsheet export, and the admin password check used by the web client's edit mode.",
        license(name = "MIT")
    ),
    paths(
        // Auth
        crate::auth::authenticate,
        // Versions
        crate::routes::versions::list_versions,
        crate::routes::versions::create_version,
        crate::routes::versions::get_version,
        crate::routes::versions::update_version,
        crate::routes::versions::delete_version,
        // Export
        crate::routes::export::export_versions,
        crate::routes::export::export_versions_csv,
    ),
    components(schemas(
        appver_core::VersionDraft,
        appver_core::VersionRecord,
        appver_core::ExportTable,
        crate::auth::AuthRequest,
        crate::auth::AuthResponse,
        crate::routes::versions::DeleteResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "auth", description = "Admin password check"),
        (name = "versions", description = "Release version CRUD"),
        (name = "export", description = "Spreadsheet export"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_route() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        for expected in [
            "/api/auth",
            "/api/versions",
            "/api/versions/{id}",
            "/api/export",
            "/api/export/csv",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }

    #[test]
    fn spec_serializes() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("VersionRecord"));
    }
}

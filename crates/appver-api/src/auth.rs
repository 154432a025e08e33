//! # Admin Password Check
//!
//! `POST /api/auth` compares the supplied password with the configured
//! secret and reports the outcome. Nothing is issued on success: no
//! session, no token. The web client calls this before entering edit
//! mode, and every call is checked from scratch.
//!
//! A wrong password is a normal `200` response with `success: false`,
//! not an error.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

const MSG_SUCCESS: &str = "認證成功";
const MSG_WRONG_PASSWORD: &str = "密碼錯誤";

/// Password check request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthRequest {
    pub password: String,
}

/// Password check outcome.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

/// Constant-time comparison of the supplied password against the secret.
///
/// When lengths differ, performs a dummy comparison to avoid leaking length
/// information through timing variance.
pub fn verify_password(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/auth", post(authenticate))
}

/// POST /api/auth — Check the admin password.
#[utoipa::path(
    post,
    path = "/api/auth",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Check performed", body = AuthResponse),
        (status = 422, description = "Malformed body", body = crate::error::ErrorBody),
    ),
    tag = "auth"
)]
pub(crate) async fn authenticate(
    State(state): State<AppState>,
    body: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let req = extract_json(body)?;

    let response = if verify_password(&req.password, &state.config.admin_password) {
        tracing::info!("admin password accepted");
        AuthResponse {
            success: true,
            message: MSG_SUCCESS.to_string(),
        }
    } else {
        tracing::warn!("admin password rejected");
        AuthResponse {
            success: false,
            message: MSG_WRONG_PASSWORD.to_string(),
        }
    };

    Ok(Json(response))
}

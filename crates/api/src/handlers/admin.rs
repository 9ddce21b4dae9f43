//! Handler for the admin login check.

use axum::extract::State;
use axum::Json;
use gallery_core::error::CoreError;
use serde::Deserialize;

use crate::auth::password::verify_admin_password;
use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// POST /api/admin/login
///
/// Confirms the shared admin password. Nothing is issued on success; the
/// caller only learns whether the password was right.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<AdminLoginRequest>,
) -> AppResult<Json<SuccessResponse<()>>> {
    if !verify_admin_password(&input.password, &state.config.admin_password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }
    Ok(Json(SuccessResponse::message("Login successful")))
}

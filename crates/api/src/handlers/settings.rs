//! Handlers for site settings.

use axum::extract::State;
use axum::Json;
use gallery_core::settings::encode_all;
use gallery_db::repositories::SettingRepo;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/settings -- every setting decoded into one object.
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Map<String, Value>>> {
    let settings = SettingRepo::load_map(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/admin/settings -- bulk upsert of `key -> value` pairs.
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<Json<SuccessResponse<()>>> {
    let encoded = encode_all(payload);
    SettingRepo::upsert_many(&state.pool, &encoded).await?;
    tracing::info!(count = encoded.len(), "Settings updated");
    Ok(Json(SuccessResponse::message("Settings updated")))
}

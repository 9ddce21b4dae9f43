//! Handlers for project image mutations. Each one refreshes the owning
//! project's cached image count.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::types::parse_id;
use gallery_db::models::image::{CreateProjectImage, ProjectImage};
use gallery_db::repositories::ImageRepo;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/admin/projects/{id}/images
pub async fn add(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(input): Json<CreateProjectImage>,
) -> AppResult<(StatusCode, Json<SuccessResponse<ProjectImage>>)> {
    let project_id = parse_id("Project", &project_id)?;
    let image = ImageRepo::add(&state.pool, project_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", project_id)))?;
    tracing::info!(%project_id, image_id = %image.id, "Project image added");
    Ok((StatusCode::CREATED, Json(SuccessResponse::data(image))))
}

/// DELETE /api/admin/projects/images/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> AppResult<Json<SuccessResponse<()>>> {
    let image_id = parse_id("Image", &image_id)?;
    let removed = ImageRepo::delete(&state.pool, image_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Image", image_id)))?;
    tracing::info!(
        %image_id,
        project_id = %removed.project_id,
        image_count = removed.image_count,
        "Project image deleted"
    );
    Ok(Json(SuccessResponse::message("Image deleted")))
}

//! Handlers for the `/projects` resource and its admin mutations.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::types::parse_id;
use gallery_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use gallery_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::query::ProjectListParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/projects?category=&published=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    let filter = params.into_filter();
    let projects = ProjectRepo::list_with_images(&state.pool, &filter).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_with_images_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", &slug)))?;
    Ok(Json(project))
}

/// POST /api/admin/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<SuccessResponse<Project>>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, slug = %project.slug, "Project created");
    Ok((StatusCode::CREATED, Json(SuccessResponse::data(project))))
}

/// PUT /api/admin/projects/{id}
///
/// Applies only the fields present and non-null. A payload with nothing to
/// apply is rejected before touching the database.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<SuccessResponse<Project>>> {
    let id = parse_id("Project", &id)?;
    if input.is_empty() {
        return Err(AppError::BadRequest("No data to update".into()));
    }
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    tracing::info!(project_id = %id, "Project updated");
    Ok(Json(SuccessResponse::data(project)))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse<()>>> {
    let id = parse_id("Project", &id)?;
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Project", id)));
    }
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(SuccessResponse::message("Project deleted")))
}

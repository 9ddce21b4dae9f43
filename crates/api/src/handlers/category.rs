//! Handlers for the `/categories` resource and its admin mutations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::slug::{ensure_slug, resolve_slug};
use gallery_core::types::parse_id;
use gallery_db::models::category::{Category, CreateCategory, UpdateCategory};
use gallery_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Category", &slug)))?;
    Ok(Json(category))
}

/// POST /api/admin/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<SuccessResponse<Category>>)> {
    let slug = resolve_slug(input.slug.as_deref(), &input.name)?;
    let input = CreateCategory {
        slug: Some(slug),
        ..input
    };
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");
    Ok((StatusCode::CREATED, Json(SuccessResponse::data(category))))
}

/// PUT /api/admin/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<SuccessResponse<Category>>> {
    let id = parse_id("Category", &id)?;
    if input.is_empty() {
        return Err(AppError::BadRequest("No data to update".into()));
    }
    if let Some(slug) = &input.slug {
        ensure_slug(slug)?;
    }
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Category", id)))?;
    tracing::info!(category_id = %id, "Category updated");
    Ok(Json(SuccessResponse::data(category)))
}

/// DELETE /api/admin/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse<()>>> {
    let id = parse_id("Category", &id)?;
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Category", id)));
    }
    tracing::info!(category_id = %id, "Category deleted");
    Ok(Json(SuccessResponse::message("Category deleted")))
}

//! Repository for the `projects` table and the aggregated project views.

use gallery_core::gallery::{group_by_owner, ProjectFilter};
use gallery_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use crate::repositories::ImageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, category, tags, thumbnail, published, \
     image_count, created_at, updated_at";

/// Provides CRUD operations and image-joined reads for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with an image count of zero, returning the row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, slug, description, category, tags, thumbnail, published, image_count)
             VALUES ($1, $2, $3, $4, $5, $6, $7, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(&input.thumbnail)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by exact slug match.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filter`, most recently created first.
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE (NOT $1 OR published)
               AND ($2::TEXT IS NULL OR category = $2)
             ORDER BY created_at DESC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.published_only)
            .bind(&filter.category)
            .fetch_all(pool)
            .await
    }

    /// List projects matching `filter`, each joined with its ordered images.
    ///
    /// Two round-trips regardless of result size: one for projects, one for
    /// all of their images.
    pub async fn list_with_images(
        pool: &PgPool,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let projects = Self::list(pool, filter).await?;
        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
        let images = ImageRepo::list_for_projects(pool, &ids).await?;
        let mut by_project = group_by_owner(images, |img| img.project_id);

        Ok(projects
            .into_iter()
            .map(|project| {
                let images = by_project.remove(&project.id).unwrap_or_default();
                ProjectDetail::assemble(project, images)
            })
            .collect())
    }

    /// Find a project by slug and join it with its ordered images.
    pub async fn find_with_images_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let Some(project) = Self::find_by_slug(pool, slug).await? else {
            return Ok(None);
        };
        let images = ImageRepo::list_for_project(pool, project.id).await?;
        Ok(Some(ProjectDetail::assemble(project, images)))
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                tags = COALESCE($6, tags),
                thumbnail = COALESCE($7, thumbnail),
                published = COALESCE($8, published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(&input.thumbnail)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Its images go with it (`ON DELETE CASCADE`).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

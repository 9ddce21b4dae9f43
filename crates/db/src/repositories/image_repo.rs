//! Repository for the `project_images` table.
//!
//! Every mutation also refreshes the owning project's cached `image_count`.
//! Mutations run in a transaction that first row-locks the project, so
//! concurrent image changes on the same project are applied one at a time
//! and each recount sees the previous one's result.

use gallery_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::image::{CreateProjectImage, ProjectImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, url, caption, orientation, sort_order, created_at";

/// Tie-break order so equal `sort_order` values come back deterministically.
const ORDER_BY: &str = "ORDER BY sort_order ASC, created_at ASC, id ASC";

/// Result of removing an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedImage {
    pub project_id: DbId,
    /// The owning project's image count after the removal.
    pub image_count: i32,
}

/// Provides image insert/delete with count maintenance, plus reads.
pub struct ImageRepo;

impl ImageRepo {
    /// Attach an image to a project and refresh the project's image count.
    ///
    /// Returns `None` without writing anything if the project does not exist.
    pub async fn add(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectImage,
    ) -> Result<Option<ProjectImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_project(&mut tx, project_id).await? {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO project_images (project_id, url, caption, orientation, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let image = sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .bind(&input.url)
            .bind(&input.caption)
            .bind(&input.orientation)
            .bind(input.sort_order)
            .fetch_one(&mut *tx)
            .await?;

        let image_count = refresh_image_count(&mut tx, project_id).await?;
        tx.commit().await?;

        tracing::debug!(%project_id, image_id = %image.id, image_count, "Image added");
        Ok(Some(image))
    }

    /// Delete an image and refresh its owning project's image count.
    ///
    /// Returns `None` without touching any project if the image does not
    /// exist (including when a concurrent request removed it first).
    pub async fn delete(pool: &PgPool, image_id: DbId) -> Result<Option<RemovedImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let project_id: Option<DbId> =
            sqlx::query_scalar("SELECT project_id FROM project_images WHERE id = $1")
                .bind(image_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(project_id) = project_id else {
            return Ok(None);
        };

        // The project may have been deleted (taking the image with it) since
        // the lookup above.
        if !lock_project(&mut tx, project_id).await? {
            return Ok(None);
        }

        let result = sqlx::query("DELETE FROM project_images WHERE id = $1")
            .bind(image_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let image_count = refresh_image_count(&mut tx, project_id).await?;
        tx.commit().await?;

        tracing::debug!(%project_id, %image_id, image_count, "Image deleted");
        Ok(Some(RemovedImage {
            project_id,
            image_count,
        }))
    }

    /// Find an image by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_images WHERE id = $1");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one project's images in display order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_images WHERE project_id = $1 {ORDER_BY}");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List the images of several projects at once, in display order.
    pub async fn list_for_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query =
            format!("SELECT {COLUMNS} FROM project_images WHERE project_id = ANY($1) {ORDER_BY}");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }
}

/// Take a row lock on a project for the rest of the transaction.
/// Returns `false` if the project does not exist.
async fn lock_project(conn: &mut PgConnection, project_id: DbId) -> Result<bool, sqlx::Error> {
    let locked: Option<DbId> = sqlx::query_scalar("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
        .bind(project_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(locked.is_some())
}

/// Count the images currently attached to a project and store the result in
/// `projects.image_count`. Returns the new count.
pub async fn refresh_image_count(
    conn: &mut PgConnection,
    project_id: DbId,
) -> Result<i32, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project_images WHERE project_id = $1")
        .bind(project_id)
        .fetch_one(&mut *conn)
        .await?;
    let count = i32::try_from(count).unwrap_or(i32::MAX);

    sqlx::query("UPDATE projects SET image_count = $2 WHERE id = $1")
        .bind(project_id)
        .bind(count)
        .execute(&mut *conn)
        .await?;
    Ok(count)
}

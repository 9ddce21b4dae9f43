//! Project entity model, DTOs, and the aggregated read view.

use gallery_core::gallery::OrderedImages;
use gallery_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::ProjectImage;

/// A row from the `projects` table.
///
/// `image_count` is the cached value maintained on image insert/delete.
/// Read views recompute it from the attached images instead.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub published: bool,
    pub image_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    /// Defaults to `true` if omitted.
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// DTO for updating an existing project. All fields are optional; `null`
/// and missing mean "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub published: Option<bool>,
}

impl UpdateProject {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.thumbnail.is_none()
            && self.published.is_none()
    }
}

/// Public read view: a project joined with its images in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub published: bool,
    /// Live count of `images`, not the cached column.
    pub image_count: i32,
    pub images: Vec<ProjectImage>,
    pub created_at: Timestamp,
}

impl ProjectDetail {
    /// Combine a project row with its image rows (in any order).
    pub fn assemble(project: Project, images: Vec<ProjectImage>) -> Self {
        let ordered = OrderedImages::new(images);
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: project.description,
            category: project.category,
            tags: project.tags,
            thumbnail: project.thumbnail,
            published: project.published,
            image_count: ordered.count,
            images: ordered.images,
            created_at: project.created_at,
        }
    }
}

//! Project image model and DTOs.

use gallery_core::gallery::DisplayOrdered;
use gallery_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Orientation recorded when the client does not send one.
pub const DEFAULT_ORIENTATION: &str = "landscape";

/// A row from the `project_images` table.
///
/// `orientation` is one of `landscape`, `portrait` or `square` by convention
/// but is stored as free text.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    pub url: String,
    pub caption: Option<String>,
    pub orientation: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
}

impl DisplayOrdered for ProjectImage {
    fn display_order(&self) -> i32 {
        self.sort_order
    }
}

/// DTO for attaching an image to a project. The owning project comes from
/// the request path, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectImage {
    pub url: String,
    pub caption: Option<String>,
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

fn default_orientation() -> String {
    DEFAULT_ORIENTATION.to_string()
}

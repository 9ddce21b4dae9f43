//! Category entity model and DTOs.

use gallery_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// DTO for creating a category. The slug is derived from `name` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub slug: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// DTO for updating a category. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

impl UpdateCategory {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none() && self.sort_order.is_none()
    }
}

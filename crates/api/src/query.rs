//! Query parameter types for list endpoints.

use gallery_core::gallery::ProjectFilter;
use serde::Deserialize;

/// `GET /projects?category=&published=`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    /// Defaults to `true`: only published projects are listed.
    pub published: Option<bool>,
}

impl ProjectListParams {
    pub fn into_filter(self) -> ProjectFilter {
        ProjectFilter::new(self.category, self.published.unwrap_or(true))
    }
}

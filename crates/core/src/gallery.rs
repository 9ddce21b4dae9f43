//! Project listing filters and image aggregation.
//!
//! The read view of a project always derives its image count from the images
//! actually attached to it; the cached `image_count` column is never trusted
//! on the read path.

use std::collections::HashMap;
use std::hash::Hash;

/// Category slug that means "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Filters applied when listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// `None` when every category should be listed.
    pub category: Option<String>,
    pub published_only: bool,
}

impl ProjectFilter {
    /// Normalize raw query input. An empty category or the `all` sentinel
    /// disables category filtering.
    pub fn new(category: Option<String>, published_only: bool) -> Self {
        let category = category.filter(|c| !c.is_empty() && c != ALL_CATEGORIES);
        Self {
            category,
            published_only,
        }
    }
}

/// Anything with a display position.
pub trait DisplayOrdered {
    fn display_order(&self) -> i32;
}

/// Images of one project in display order, with the live count.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedImages<I> {
    pub images: Vec<I>,
    pub count: i32,
}

impl<I: DisplayOrdered> OrderedImages<I> {
    /// Sort ascending by display order. The sort is stable, so images sharing
    /// an order keep their input order.
    pub fn new(mut images: Vec<I>) -> Self {
        images.sort_by_key(|img| img.display_order());
        let count = i32::try_from(images.len()).unwrap_or(i32::MAX);
        Self { images, count }
    }
}

/// Group child rows by owner key, keeping each group's input order.
pub fn group_by_owner<K, I, F>(items: impl IntoIterator<Item = I>, owner: F) -> HashMap<K, Vec<I>>
where
    K: Eq + Hash,
    F: Fn(&I) -> K,
{
    let mut groups: HashMap<K, Vec<I>> = HashMap::new();
    for item in items {
        groups.entry(owner(&item)).or_default().push(item);
    }
    groups
}

//! URL slug derivation for categories created without an explicit slug.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, collapses every run of non-alphanumeric ASCII into a single
/// `-`, and trims leading/trailing dashes.
///
/// # Examples
///
/// ```
/// use gallery_core::slug::slugify;
///
/// assert_eq!(slugify("Urban Design"), "urban-design");
/// assert_eq!(slugify("  Interiors & Renovations! "), "interiors-renovations");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Pick the slug for a new category: the explicit one when given, otherwise
/// one derived from `name`.
///
/// Fails when the result is blank, since a blank slug can never be looked up.
pub fn resolve_slug(explicit: Option<&str>, name: &str) -> Result<String, CoreError> {
    let slug = match explicit {
        Some(slug) => slug.to_string(),
        None => slugify(name),
    };
    ensure_slug(&slug)?;
    Ok(slug)
}

/// Reject a blank slug.
pub fn ensure_slug(slug: &str) -> Result<(), CoreError> {
    if slug.trim().is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    Ok(())
}

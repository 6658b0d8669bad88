// src/domain/article/path.rs
//! Mapping from content paths to article slugs.
//!
//! The slug of an article is the last segment of its path: `/wiki/rust/ownership`
//! has slug `ownership`. Related-article declarations, the HTTP routes and the
//! content layout all rely on this convention, so it lives here rather than
//! being re-derived with ad hoc string splitting.

use super::value_objects::ArticleSlug;

/// Returns the slug for `path`, ignoring a trailing `/`.
///
/// Yields `None` when the path has no non-empty segment.
pub fn slug_from_path(path: &str) -> Option<ArticleSlug> {
    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    ArticleSlug::new(segment).ok()
}

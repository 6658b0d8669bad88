// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate};
use std::fmt;

use super::path::slug_from_path;

/// Identifier of an article: the last segment of its content path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.contains('/') {
            return Err(DomainError::Validation(
                "slug cannot contain a path separator".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

/// Content path of an article, e.g. `/wiki/rust/ownership`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticlePath(String);

impl ArticlePath {
    /// Prefix under which wiki articles live.
    pub const WIKI_PREFIX: &'static str = "/wiki";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !value.starts_with('/') {
            return Err(DomainError::Validation(format!(
                "article path must be absolute: {value}"
            )));
        }
        if slug_from_path(&value).is_none() {
            return Err(DomainError::Validation(format!(
                "article path has no slug segment: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Canonical path of a top-level wiki article.
    pub fn for_slug(slug: &ArticleSlug) -> Self {
        Self(format!("{}/{}", Self::WIKI_PREFIX, slug.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticlePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Publication date. Time-of-day information is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleDate(NaiveDate);

impl ArticleDate {
    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self(dt.date_naive()))
            .map_err(|_| DomainError::Validation(format!("invalid article date: {value}")))
    }
}

impl fmt::Display for ArticleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleLabel(String);

impl ArticleLabel {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("label cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

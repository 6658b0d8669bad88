// src/domain/article/entity.rs
use crate::domain::article::path::slug_from_path;
use crate::domain::article::value_objects::{
    ArticleDate, ArticleDescription, ArticleLabel, ArticlePath, ArticleSlug, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct Article {
    pub path: ArticlePath,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub date: ArticleDate,
    pub draft: bool,
    pub labels: Vec<ArticleLabel>,
    /// Forward edges as declared by the author. May name slugs that do not exist.
    pub related_articles: Vec<ArticleSlug>,
    pub body: String,
}

impl Article {
    pub fn new(
        path: ArticlePath,
        title: ArticleTitle,
        description: ArticleDescription,
        date: ArticleDate,
    ) -> DomainResult<Self> {
        let slug = slug_from_path(path.as_str()).ok_or_else(|| {
            DomainError::Validation(format!("article path has no slug segment: {path}"))
        })?;

        Ok(Self {
            path,
            slug,
            title,
            description,
            date,
            draft: false,
            labels: Vec::new(),
            related_articles: Vec::new(),
            body: String::new(),
        })
    }

    pub fn with_labels(mut self, labels: Vec<ArticleLabel>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_related_articles(mut self, related: Vec<ArticleSlug>) -> Self {
        self.related_articles = related;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    /// Whether this article lists `slug` among its related articles.
    pub fn declares_related(&self, slug: &ArticleSlug) -> bool {
        self.related_articles.iter().any(|candidate| candidate == slug)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|candidate| candidate.as_str() == label)
    }
}

// tests/support/mocks.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiki_core::domain::article::{Article, ArticlePath, ArticleReadRepository};
use wiki_core::domain::errors::{DomainError, DomainResult};

/// In-memory article store; counts `list` calls.
pub struct InMemoryArticleRepo {
    articles: Vec<Article>,
    list_calls: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_path(
        &self,
        path: &ArticlePath,
        include_drafts: bool,
    ) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .iter()
            .find(|a| a.path == *path && (include_drafts || !a.draft))
            .cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Article>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .articles
            .iter()
            .filter(|a| include_drafts || !a.draft)
            .cloned()
            .collect())
    }
}

/// Store that is always unavailable.
pub struct UnavailableArticleRepo;

#[async_trait]
impl ArticleReadRepository for UnavailableArticleRepo {
    async fn find_by_path(
        &self,
        _path: &ArticlePath,
        _include_drafts: bool,
    ) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("content store unavailable".into()))
    }

    async fn list(&self, _include_drafts: bool) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("content store unavailable".into()))
    }
}

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticlePath;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read access to the article content store.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_path(
        &self,
        path: &ArticlePath,
        include_drafts: bool,
    ) -> DomainResult<Option<Article>>;
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Article>>;
}

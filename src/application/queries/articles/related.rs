use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticlePath, resolve_related},
        errors::DomainError,
    },
};

pub struct RelatedArticlesQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Articles the target declares as related plus articles declaring the target.
    pub async fn related_articles(
        &self,
        query: RelatedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let slug = self.parse_slug(&query.slug)?;

        let target = self
            .read_repo
            .find_by_path(&ArticlePath::for_slug(&slug), self.include_drafts)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let corpus = self.read_repo.list(self.include_drafts).await?;
        let related = match resolve_related(&target.path, &corpus) {
            Ok(related) => related,
            Err(DomainError::NotFound(_)) => {
                return Err(ApplicationError::not_found("article not found"));
            }
            Err(other) => return Err(ApplicationError::from(other)),
        };

        if !related.dangling.is_empty() {
            tracing::debug!(
                slug = %slug,
                dangling = ?related.dangling,
                "dropping related-article references with no matching article"
            );
        }

        Ok(related
            .articles
            .into_iter()
            .map(ArticleSummaryDto::from)
            .collect())
    }
}

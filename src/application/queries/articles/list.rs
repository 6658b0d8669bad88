use super::ArticleQueryService;
use crate::application::{dto::ArticleSummaryDto, error::ApplicationResult};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    /// Only articles carrying this exact label.
    pub label: Option<String>,
}

impl ArticleQueryService {
    /// Newest first; articles sharing a date are ordered by path.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let mut records = self.read_repo.list(self.include_drafts).await?;

        if let Some(label) = query.label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            records.retain(|article| article.has_label(label));
        }

        records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.path.cmp(&b.path)));

        Ok(records.iter().map(ArticleSummaryDto::from).collect())
    }
}

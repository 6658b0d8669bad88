use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing view of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub path: String,
    /// Publication date, `YYYY-MM-DD`.
    #[schema(example = "2024-03-01")]
    pub date: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl From<&Article> for ArticleSummaryDto {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.as_str().to_string(),
            description: article.description.as_str().to_string(),
            slug: article.slug.as_str().to_string(),
            path: article.path.as_str().to_string(),
            date: article.date.to_string(),
            labels: article
                .labels
                .iter()
                .map(|label| label.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    #[serde(flatten)]
    pub summary: ArticleSummaryDto,
    pub draft: bool,
    /// Related slugs exactly as declared, including ones that match no article.
    pub related_articles: Vec<String>,
    /// Raw Markdown source.
    pub body: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let summary = ArticleSummaryDto::from(&article);
        Self {
            summary,
            draft: article.draft,
            related_articles: article
                .related_articles
                .into_iter()
                .map(|slug| slug.into_inner())
                .collect(),
            body: article.body,
        }
    }
}

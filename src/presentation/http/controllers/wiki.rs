// src/presentation/http/controllers/wiki.rs
use crate::application::{
    dto::{ArticleDto, ArticleSummaryDto},
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery, RelatedArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::WikiSlug;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Only return articles carrying this label.
    #[serde(default)]
    pub label: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/wiki",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = [ArticleSummaryDto])
    ),
    tag = "Wiki"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            label: params.label,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/wiki/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article with its raw Markdown body.", body = ArticleDto),
        (status = 400, description = "Slug missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Wiki"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    WikiSlug(slug): WikiSlug,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/wiki/{slug}/related",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Articles the target links to or is linked from.", body = [ArticleSummaryDto]),
        (status = 400, description = "Slug missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Wiki"
)]
pub async fn related_articles(
    Extension(state): Extension<HttpState>,
    WikiSlug(slug): WikiSlug,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .related_articles(RelatedArticlesQuery { slug })
        .await
        .into_http()
        .map(Json)
}

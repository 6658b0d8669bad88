mod get_by_slug;
mod list;
mod related;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use related::RelatedArticlesQuery;
pub use service::ArticleQueryService;

// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::articles::ArticleQueryService, domain::article::ArticleReadRepository,
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_read_repo: Arc<dyn ArticleReadRepository>, include_drafts: bool) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            include_drafts,
        ));

        Self { article_queries }
    }
}

use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleReadRepository, ArticleSlug},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) include_drafts: bool,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, include_drafts: bool) -> Self {
        Self {
            read_repo,
            include_drafts,
        }
    }

    /// Parses a slug taken from a request. Blank input counts as absent.
    pub(super) fn parse_slug(&self, raw: &str) -> ApplicationResult<ArticleSlug> {
        if raw.trim().is_empty() {
            return Err(ApplicationError::missing_parameter("slug is required"));
        }
        ArticleSlug::new(raw).map_err(|err| ApplicationError::validation(err.to_string()))
    }
}

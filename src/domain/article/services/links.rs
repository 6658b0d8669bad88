// src/domain/article/services/links.rs
use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticlePath, ArticleSlug};

/// A related-article declaration that names no article in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub source: ArticlePath,
    pub missing: ArticleSlug,
}

/// Lists every dangling related-article declaration, in corpus order.
pub fn find_dangling_references(corpus: &[Article]) -> Vec<DanglingReference> {
    let known: HashSet<&ArticleSlug> = corpus.iter().map(|article| &article.slug).collect();

    corpus
        .iter()
        .flat_map(|article| {
            article
                .related_articles
                .iter()
                .filter(|slug| !known.contains(slug))
                .map(move |slug| DanglingReference {
                    source: article.path.clone(),
                    missing: slug.clone(),
                })
        })
        .collect()
}

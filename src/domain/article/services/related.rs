// src/domain/article/services/related.rs
use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticlePath, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};

/// Articles related to a target, borrowed from the corpus they were resolved against.
#[derive(Debug)]
pub struct RelatedSet<'a> {
    pub target: &'a Article,
    /// Related articles in corpus order, target excluded.
    pub articles: Vec<&'a Article>,
    /// Slugs the target declares that match no article in the corpus.
    pub dangling: Vec<&'a ArticleSlug>,
}

/// Resolves the articles related to the article at `target` at depth 1.
///
/// B is related to A when A declares B or B declares A. Declared slugs with no
/// matching article are dropped; nothing sharing the target's slug is part of
/// the result. The target is matched by path because slugs need not be unique.
pub fn resolve_related<'a>(
    target: &ArticlePath,
    corpus: &'a [Article],
) -> DomainResult<RelatedSet<'a>> {
    let article = corpus
        .iter()
        .find(|candidate| candidate.path == *target)
        .ok_or_else(|| DomainError::NotFound(format!("article not found: {target}")))?;
    let target = &article.slug;

    let reverse = corpus
        .iter()
        .filter(|candidate| candidate.declares_related(target))
        .map(|candidate| &candidate.slug);

    let mut seen: HashSet<&ArticleSlug> = HashSet::new();
    let related: Vec<&ArticleSlug> = article
        .related_articles
        .iter()
        .chain(reverse)
        .filter(|slug| seen.insert(*slug))
        .collect();

    let articles = corpus
        .iter()
        .filter(|candidate| candidate.slug != *target && related.contains(&&candidate.slug))
        .collect();

    let dangling = article
        .related_articles
        .iter()
        .filter(|slug| !corpus.iter().any(|candidate| candidate.slug == **slug))
        .collect();

    Ok(RelatedSet {
        target: article,
        articles,
        dangling,
    })
}

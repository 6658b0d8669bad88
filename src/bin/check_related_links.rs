// src/bin/check_related_links.rs
//! Reports related-article declarations that name no existing article.
//!
//! The HTTP API drops such references silently; run this as part of the content
//! build to catch them. Exits with status 1 when any are found.
use anyhow::{Result, bail};
use wiki_core::{
    config::AppConfig,
    domain::article::{ArticleReadRepository, find_dangling_references},
    infrastructure::repositories::FileSystemArticleRepository,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repo = FileSystemArticleRepository::new(config.content_dir().clone());

    // Drafts may link to published articles and vice versa, so check everything.
    let corpus = repo.list(true).await?;
    let dangling = find_dangling_references(&corpus);

    for reference in &dangling {
        tracing::warn!(
            source = %reference.source,
            missing = %reference.missing,
            "related article does not exist"
        );
    }

    if !dangling.is_empty() {
        bail!(
            "{} dangling related-article reference(s) under {}",
            dangling.len(),
            repo.root().display()
        );
    }

    tracing::info!(articles = corpus.len(), "all related-article references resolve");
    Ok(())
}

// src/infrastructure/repositories/filesystem_article.rs
use crate::domain::article::{
    Article, ArticleDate, ArticleDescription, ArticleLabel, ArticlePath, ArticleReadRepository,
    ArticleSlug, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::front_matter::split_front_matter;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::error::{map_content, map_io, map_yaml};

const WIKI_DIR: &str = "wiki";
const MARKDOWN_EXTENSION: &str = "md";

/// Article store backed by Markdown files under `<root>/wiki`.
///
/// Files are read on every call; nothing is cached between requests.
#[derive(Clone)]
pub struct FileSystemArticleRepository {
    root: PathBuf,
}

impl FileSystemArticleRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    title: String,
    description: String,
    date: String,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    labels: Option<Vec<String>>,
    #[serde(default)]
    related_articles: Option<Vec<String>>,
}

struct ArticleDocument {
    path: ArticlePath,
    front_matter: FrontMatter,
    body: String,
}

impl TryFrom<ArticleDocument> for Article {
    type Error = DomainError;

    fn try_from(doc: ArticleDocument) -> Result<Self, Self::Error> {
        let ArticleDocument {
            path,
            front_matter,
            body,
        } = doc;

        let labels = front_matter
            .labels
            .unwrap_or_default()
            .into_iter()
            .filter_map(|label| match ArticleLabel::new(label) {
                Ok(label) => Some(label),
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "skipping invalid label");
                    None
                }
            })
            .collect();

        let related = front_matter
            .related_articles
            .unwrap_or_default()
            .into_iter()
            .filter_map(|slug| match ArticleSlug::new(slug) {
                Ok(slug) => Some(slug),
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "skipping invalid related article");
                    None
                }
            })
            .collect();

        let article = Article::new(
            path,
            ArticleTitle::new(front_matter.title)?,
            ArticleDescription::new(front_matter.description),
            ArticleDate::parse(&front_matter.date)?,
        )?
        .with_draft(front_matter.draft)
        .with_labels(labels)
        .with_related_articles(related)
        .with_body(body);

        Ok(article)
    }
}

/// `<root>/wiki/rust/ownership.md` -> `/wiki/rust/ownership`.
fn article_path_for(root: &Path, file: &Path) -> DomainResult<ArticlePath> {
    let relative = file.strip_prefix(root).map_err(|_| {
        DomainError::Persistence(format!("{} is outside the content root", file.display()))
    })?;
    let without_extension = relative.with_extension("");
    let segments: Vec<String> = without_extension
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    ArticlePath::new(format!("/{}", segments.join("/")))
}

/// Inverse of [`article_path_for`]. Rejects paths that would leave the content root.
fn file_for_article_path(root: &Path, path: &ArticlePath) -> Option<PathBuf> {
    let relative = Path::new(path.as_str().trim_start_matches('/'));
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }
    let mut file = root.join(relative);
    let file_name = format!("{}.{MARKDOWN_EXTENSION}", file.file_name()?.to_string_lossy());
    file.set_file_name(file_name);
    Some(file)
}

fn parse_article(root: &Path, file: &Path) -> DomainResult<Article> {
    let content = fs::read_to_string(file).map_err(|err| map_io(file, err))?;
    let (yaml, body) = split_front_matter(&content).ok_or_else(|| {
        DomainError::Persistence(format!("missing front matter in {}", file.display()))
    })?;
    let front_matter: FrontMatter = serde_yaml::from_str(yaml).map_err(|err| map_yaml(file, err))?;

    Article::try_from(ArticleDocument {
        path: article_path_for(root, file)?,
        front_matter,
        body: body.to_string(),
    })
    .map_err(|err| map_content(file, err))
}

/// Markdown files under `dir` in path order. Hidden entries are skipped and
/// symlinks are not followed.
fn collect_markdown_files(dir: &Path) -> DomainResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 && is_not_found(&err) => return Ok(files),
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                return Err(map_io(&path, err.into()));
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) == Some(MARKDOWN_EXTENSION) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error().map(io::Error::kind) == Some(ErrorKind::NotFound)
}

fn load_corpus(root: &Path, include_drafts: bool) -> DomainResult<Vec<Article>> {
    let files = collect_markdown_files(&root.join(WIKI_DIR))?;

    let mut articles = Vec::with_capacity(files.len());
    for file in files {
        let article = parse_article(root, &file)?;
        if include_drafts || !article.draft {
            articles.push(article);
        }
    }

    tracing::debug!(root = %root.display(), count = articles.len(), "loaded wiki corpus");
    Ok(articles)
}

fn load_one(
    root: &Path,
    path: &ArticlePath,
    include_drafts: bool,
) -> DomainResult<Option<Article>> {
    let Some(file) = file_for_article_path(root, path) else {
        return Ok(None);
    };
    if !file.is_file() {
        return Ok(None);
    }

    let article = parse_article(root, &file)?;
    if article.draft && !include_drafts {
        return Ok(None);
    }
    Ok(Some(article))
}

async fn run_blocking<T, F>(task: F) -> DomainResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> DomainResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| DomainError::Persistence(format!("content loader task failed: {err}")))?
}

#[async_trait]
impl ArticleReadRepository for FileSystemArticleRepository {
    async fn find_by_path(
        &self,
        path: &ArticlePath,
        include_drafts: bool,
    ) -> DomainResult<Option<Article>> {
        let root = self.root.clone();
        let path = path.clone();
        run_blocking(move || load_one(&root, &path, include_drafts)).await
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Article>> {
        let root = self.root.clone();
        run_blocking(move || load_corpus(&root, include_drafts)).await
    }
}

// tests/filesystem_content.rs
//! Router wired to the Markdown content store.
use axum::http::StatusCode;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use wiki_core::domain::article::{ArticleReadRepository, find_dangling_references};
use wiki_core::infrastructure::repositories::FileSystemArticleRepository;

mod support;

fn write_article(root: &Path, relative: &str, title: &str, related: &[&str]) {
    let file = root.join("wiki").join(relative);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    let related = related.join(", ");
    let content = format!(
        "---\ntitle: {title}\ndescription: {title} notes\ndate: 2024-04-01\nlabels:\n  - notes\nrelatedArticles: [{related}]\n---\n\n# {title}\n"
    );
    fs::write(file, content).unwrap();
}

fn sample_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_article(dir.path(), "a.md", "A", &["b"]);
    write_article(dir.path(), "b.md", "B", &[]);
    write_article(dir.path(), "c.md", "C", &["a", "ghost"]);
    dir
}

#[tokio::test]
async fn related_endpoint_reads_markdown_files() {
    let site = sample_site();
    let repo = Arc::new(FileSystemArticleRepository::new(site.path()));
    let app = support::make_router_with_repo(repo, false);

    let (status, json) = support::get_json(app, "/api/wiki/a/related").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(support::slugs(&json), vec!["b", "c"]);
    assert_eq!(json[1]["description"], "C notes");
    assert_eq!(json[1]["labels"], serde_json::json!(["notes"]));
}

#[tokio::test]
async fn edits_are_visible_without_restart() {
    let site = sample_site();
    let repo = Arc::new(FileSystemArticleRepository::new(site.path()));

    let app = support::make_router_with_repo(repo.clone(), false);
    let (_, json) = support::get_json(app, "/api/wiki/b/related").await;
    assert_eq!(support::slugs(&json), vec!["a"]);

    write_article(site.path(), "d.md", "D", &["b"]);

    let app = support::make_router_with_repo(repo, false);
    let (_, json) = support::get_json(app, "/api/wiki/b/related").await;
    assert_eq!(support::slugs(&json), vec!["a", "d"]);
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_directory_cycle_is_not_walked() {
    let site = sample_site();
    let wiki = site.path().join("wiki");
    std::os::unix::fs::symlink(&wiki, wiki.join("loop")).unwrap();
    let repo = Arc::new(FileSystemArticleRepository::new(site.path()));

    let app = support::make_router_with_repo(repo.clone(), false);
    let (status, json) = support::get_json(app, "/api/wiki").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(3));

    let app = support::make_router_with_repo(repo, false);
    let (_, json) = support::get_json(app, "/api/wiki/a/related").await;
    assert_eq!(support::slugs(&json), vec!["b", "c"]);
}

#[tokio::test]
async fn broken_file_surfaces_as_500() {
    let site = sample_site();
    fs::write(site.path().join("wiki/broken.md"), "no front matter here").unwrap();
    let repo = Arc::new(FileSystemArticleRepository::new(site.path()));
    let app = support::make_router_with_repo(repo, false);

    support::assert_error_response(
        app,
        "/api/wiki/a/related",
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    )
    .await;
}

#[tokio::test]
async fn dangling_audit_reports_missing_targets() {
    let site = sample_site();
    let repo = FileSystemArticleRepository::new(site.path());
    let corpus = repo.list(true).await.unwrap();

    let dangling = find_dangling_references(&corpus);
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].source.as_str(), "/wiki/c");
    assert_eq!(dangling[0].missing.as_str(), "ghost");
}

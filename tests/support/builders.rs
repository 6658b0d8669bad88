// tests/support/builders.rs
use wiki_core::domain::article::*;

pub struct ArticleBuilder {
    path: String,
    title: String,
    description: String,
    date: String,
    draft: bool,
    labels: Vec<String>,
    related: Vec<String>,
    body: String,
}

impl ArticleBuilder {
    /// Top-level article at `/wiki/{slug}`.
    pub fn new(slug: &str) -> Self {
        Self::at_path(&format!("/wiki/{slug}"))
    }

    pub fn at_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            title: format!("Title of {path}"),
            description: format!("Description of {path}"),
            date: "2024-01-01".into(),
            draft: false,
            labels: Vec::new(),
            related: Vec::new(),
            body: "body".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn related(mut self, related: &[&str]) -> Self {
        self.related = related.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Article {
        Article::new(
            ArticlePath::new(self.path).unwrap(),
            ArticleTitle::new(self.title).unwrap(),
            ArticleDescription::new(self.description),
            ArticleDate::parse(&self.date).unwrap(),
        )
        .unwrap()
        .with_draft(self.draft)
        .with_labels(
            self.labels
                .into_iter()
                .map(|l| ArticleLabel::new(l).unwrap())
                .collect(),
        )
        .with_related_articles(
            self.related
                .into_iter()
                .map(|s| ArticleSlug::new(s).unwrap())
                .collect(),
        )
        .with_body(self.body)
    }
}

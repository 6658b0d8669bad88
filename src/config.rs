// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    content_dir: PathBuf,
    listen_addr: String,
    allowed_origins: Vec<String>,
    include_drafts: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let content_dir = env::var("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_content_dir());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        if content_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("CONTENT_DIR cannot be empty".into()));
        }

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let include_drafts = env::var("WIKI_INCLUDE_DRAFTS")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            content_dir,
            listen_addr,
            allowed_origins,
            include_drafts,
        })
    }

    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            listen_addr: default_listen_addr(),
            allowed_origins: default_allowed_origins(),
            include_drafts: false,
        }
    }

    pub fn content_dir(&self) -> &PathBuf {
        &self.content_dir
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Whether articles marked `draft: true` are served.
    pub fn include_drafts(&self) -> bool {
        self.include_drafts
    }
}

// src/infrastructure/repositories/mod.rs
mod error;
mod filesystem_article;

pub use filesystem_article::FileSystemArticleRepository;

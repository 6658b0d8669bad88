pub mod entity;
pub mod path;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::Article;
pub use path::slug_from_path;
pub use repository::ArticleReadRepository;
pub use services::{DanglingReference, RelatedSet, find_dangling_references, resolve_related};
pub use value_objects::{
    ArticleDate, ArticleDescription, ArticleLabel, ArticlePath, ArticleSlug, ArticleTitle,
};

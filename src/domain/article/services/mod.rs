// src/domain/article/services/mod.rs
mod links;
mod related;

pub use links::{DanglingReference, find_dangling_references};
pub use related::{RelatedSet, resolve_related};

// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::HttpError;

/// The `{slug}` segment of a wiki route, rejected with 400 when blank.
#[derive(Debug, Clone)]
pub struct WikiSlug(pub String);

impl<S> FromRequestParts<S> for WikiSlug
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(slug) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(rejection.body_text()))
            })?;

        if slug.trim().is_empty() {
            return Err(HttpError::from_error(ApplicationError::missing_parameter(
                "slug is required",
            )));
        }

        Ok(Self(slug))
    }
}

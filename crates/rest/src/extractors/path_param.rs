//! Single path segment extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for a route's single path parameter, as a raw string.
///
/// Rejects with [`RestError::BadRequest`] when the segment cannot be
/// decoded (for example invalid UTF-8 after percent-decoding), so every
/// failure still answers with a `{"msg": ...}` body.
///
/// # Example
///
/// ```rust,ignore
/// use newsboard_rest::extractors::PathParam;
///
/// async fn read_handler(PathParam(article_id): PathParam) {
///     println!("article {}", article_id);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParam(pub String);

impl<S> FromRequestParts<S> for PathParam
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}

//! Article listing query parameters extractor.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::error::RestError;

/// Axum extractor for `GET /api/articles` query parameters.
///
/// Values are kept as raw strings; allowlist checks happen in the service.
/// The sort direction is accepted as either `order` or `order_by`.
///
/// # Example
///
/// ```rust,ignore
/// use newsboard_rest::extractors::ArticleListParams;
///
/// async fn list_handler(params: ArticleListParams) {
///     println!("sort by {:?}", params.sort_by);
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleListParams {
    /// Topic slug to filter by.
    pub topic: Option<String>,

    /// Column to sort by.
    pub sort_by: Option<String>,

    /// Sort direction.
    #[serde(alias = "order_by")]
    pub order: Option<String>,
}

impl<S> FromRequestParts<S> for ArticleListParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ArticleListParams>::from_request_parts(parts, state).await?;
        Ok(params)
    }
}

//! Axum extractors for Newsboard requests.
//!
//! - [`JsonBody`] - Extract a JSON request body, treating an empty body as `{}`
//! - [`ArticleListParams`] - Extract article listing query parameters
//! - [`PathParam`] - Extract a route's single path segment
//!
//! All reject with [`RestError::BadRequest`](crate::error::RestError::BadRequest).

mod article_params;
mod json_body;
mod path_param;

pub use article_params::ArticleListParams;
pub use json_body::JsonBody;
pub use path_param::PathParam;

//! Core types for the persistence layer.
//!
//! - [`Topic`], [`User`], [`Article`], [`ArticleSummary`], [`Comment`] - stored rows
//! - [`ArticleQuery`], [`SortColumn`], [`SortOrder`] - article listing options
//! - [`SeedData`] - a dataset for populating an empty database
//!
//! # Building an Article Query
//!
//! ```
//! use newsboard_persistence::types::{ArticleQuery, SortColumn, SortOrder};
//!
//! let sort_by = SortColumn::parse("votes").expect("allowlisted column");
//! let order = SortOrder::parse("asc").expect("allowlisted direction");
//!
//! let query = ArticleQuery::new()
//!     .with_topic("cats")
//!     .with_sort_by(sort_by)
//!     .with_order(order);
//!
//! assert_eq!(query.sort_by.as_str(), "votes");
//! assert!(SortColumn::parse("password").is_none());
//! ```

mod article_query;
mod entities;
mod seed;

pub use article_query::{ArticleQuery, SortColumn, SortOrder};
pub use entities::{Article, ArticleSummary, Comment, NewComment, Topic, User};
pub use seed::{SeedArticle, SeedComment, SeedData};

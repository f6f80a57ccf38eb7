//! Newsboard Persistence Layer
//!
//! This crate stores the four resources of the Newsboard discussion API
//! (topics, users, articles and comments) and exposes them through the
//! [`NewsStorage`](core::NewsStorage) trait.
//!
//! # Backend Features
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`types`] - Stored rows, article listing options and seed datasets
//! - [`error`] - Error types for all operations
//! - [`core`] - The storage trait
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use newsboard_persistence::backends::sqlite::SqliteBackend;
//! use newsboard_persistence::core::NewsStorage;
//! use newsboard_persistence::types::{ArticleQuery, SortColumn, SortOrder};
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let query = ArticleQuery::new()
//!     .with_topic("cats")
//!     .with_sort_by(SortColumn::Votes)
//!     .with_order(SortOrder::Ascending);
//! let articles = backend.list_articles(&query).await?;
//! assert!(articles.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Storage never decides what a missing row means. Lookups return `Option`
//! and deletes return whether a row was removed. The one structured failure
//! callers act on is a foreign key violation, which names the offending column:
//!
//! ```
//! use newsboard_persistence::error::{ConstraintError, StorageError};
//!
//! let err = StorageError::from(ConstraintError::ForeignKeyViolation {
//!     table: "comments".to_string(),
//!     column: "author".to_string(),
//! });
//! assert_eq!(err.foreign_key_column(), Some("author"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{ArticleQuery, SeedData, SortColumn, SortOrder};

// Re-export core traits
pub use core::NewsStorage;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! SQLite backend implementation.
//!
//! This module provides a SQLite implementation of [`NewsStorage`](crate::core::NewsStorage).
//! It supports both in-memory databases (great for testing) and file-based
//! databases (for development and small deployments).
//!
//! # Example
//!
//! ```no_run
//! use newsboard_persistence::backends::sqlite::SqliteBackend;
//! use newsboard_persistence::types::SeedData;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! backend.seed(&SeedData::from_file("data/test-data.json")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE topics (slug TEXT PRIMARY KEY, description TEXT NOT NULL);
//! CREATE TABLE users (username TEXT PRIMARY KEY, name TEXT NOT NULL, avatar_url TEXT NOT NULL);
//! CREATE TABLE articles (
//!     article_id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     title TEXT NOT NULL,
//!     topic TEXT NOT NULL REFERENCES topics(slug),
//!     author TEXT NOT NULL REFERENCES users(username),
//!     body TEXT NOT NULL,
//!     created_at TEXT NOT NULL,
//!     votes INTEGER NOT NULL DEFAULT 0,
//!     article_img_url TEXT NOT NULL DEFAULT ''
//! );
//! CREATE TABLE comments (
//!     comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     body TEXT NOT NULL,
//!     article_id INTEGER NOT NULL REFERENCES articles(article_id) ON DELETE CASCADE,
//!     author TEXT NOT NULL REFERENCES users(username),
//!     votes INTEGER NOT NULL DEFAULT 0,
//!     created_at TEXT NOT NULL
//! );
//! ```

mod backend;
mod query_builder;
mod schema;
mod seed;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use query_builder::{ArticleQueryBuilder, SqlFragment, SqlParam};

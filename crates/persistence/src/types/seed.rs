//! Seed datasets.
//!
//! A [`SeedData`] is loaded verbatim into an empty database. Rows are
//! inserted in the order given, so articles and comments receive ids
//! `1..=N` in file order.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, StorageResult};

use super::{Topic, User};

/// An article as it appears in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i64,
    pub article_img_url: String,
}

/// A comment as it appears in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedComment {
    pub body: String,
    /// 1-based position of the article in [`SeedData::articles`].
    pub article_id: i64,
    pub author: String,
    #[serde(default)]
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

/// A complete dataset for all four tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub articles: Vec<SeedArticle>,
    #[serde(default)]
    pub comments: Vec<SeedComment>,
}

impl SeedData {
    /// Parses a dataset from JSON text.
    pub fn from_json_str(json: &str) -> StorageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a dataset from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(BackendError::from)?;
        Self::from_json_str(&text)
    }

    /// Number of comments seeded for the article at `article_id`.
    pub fn comment_count(&self, article_id: i64) -> usize {
        self.comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .count()
    }
}

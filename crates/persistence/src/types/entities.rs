//! Row types for the four board entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discussion topic, keyed by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique slug (e.g. `"cats"`).
    pub slug: String,
    /// Human-readable description.
    pub description: String,
}

/// A registered user, keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique username.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// A full article row.
///
/// `comment_count` is derived at read time. It is present on single-article
/// fetches and absent on the row returned by a vote update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Storage-assigned identifier.
    pub article_id: i64,
    /// Headline.
    pub title: String,
    /// Slug of the topic the article belongs to.
    pub topic: String,
    /// Username of the author.
    pub author: String,
    /// Article text.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Accumulated votes, may be negative.
    pub votes: i64,
    /// Cover image URL.
    pub article_img_url: String,
    /// Number of comments on the article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

/// The list projection of an article: every column except `body`, plus the
/// derived comment count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Storage-assigned identifier.
    pub article_id: i64,
    /// Headline.
    pub title: String,
    /// Slug of the topic the article belongs to.
    pub topic: String,
    /// Username of the author.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Accumulated votes, may be negative.
    pub votes: i64,
    /// Cover image URL.
    pub article_img_url: String,
    /// Number of comments on the article.
    pub comment_count: i64,
}

/// A comment on an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Storage-assigned identifier.
    pub comment_id: i64,
    /// Comment text.
    pub body: String,
    /// The article this comment belongs to.
    pub article_id: i64,
    /// Username of the author.
    pub author: String,
    /// Accumulated votes.
    pub votes: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// The fields a caller supplies when posting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Username of the author.
    pub author: String,
    /// Comment text.
    pub body: String,
}

impl NewComment {
    /// Creates a new comment payload.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }
}

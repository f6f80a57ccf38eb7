//! Filter, sort and order options for listing articles.
//!
//! Column names and directions end up interpolated into an `ORDER BY`
//! clause, where bound parameters are not available. The only way to
//! construct a [`SortColumn`] or [`SortOrder`] from caller input is through
//! their `parse` functions, which accept exactly the allowlisted tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A column articles may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// `article_id`
    ArticleId,
    /// `title`
    Title,
    /// `topic`
    Topic,
    /// `author`
    Author,
    /// `body`
    Body,
    /// `created_at`
    #[default]
    CreatedAt,
    /// `votes`
    Votes,
    /// `article_img_url`
    ArticleImgUrl,
    /// `comment_count` (the derived aggregate)
    CommentCount,
}

impl SortColumn {
    /// Every sortable column, in declaration order.
    pub const ALL: [SortColumn; 9] = [
        SortColumn::ArticleId,
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::Body,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::ArticleImgUrl,
        SortColumn::CommentCount,
    ];

    /// Parses a caller-supplied column name. Returns `None` for anything
    /// outside the allowlist.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == s)
    }

    /// Returns the public column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::ArticleId => "article_id",
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::Body => "body",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::ArticleImgUrl => "article_img_url",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending order.
    Ascending,
    /// Descending order.
    #[default]
    Descending,
}

impl SortOrder {
    /// Parses a caller-supplied direction token.
    ///
    /// Accepts exactly `asc`, `desc`, `ASC` and `DESC`; mixed case is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" | "ASC" => Some(SortOrder::Ascending),
            "desc" | "DESC" => Some(SortOrder::Descending),
            _ => None,
        }
    }

    /// Returns the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Options for listing articles.
///
/// Defaults to every topic, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleQuery {
    /// Restrict to articles with this topic slug.
    pub topic: Option<String>,
    /// Column to sort by.
    pub sort_by: SortColumn,
    /// Sort direction.
    pub order: SortOrder,
}

impl ArticleQuery {
    /// Creates a query with default sort and no topic filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Sets the sort column.
    pub fn with_sort_by(mut self, column: SortColumn) -> Self {
        self.sort_by = column;
        self
    }

    /// Sets the sort direction.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

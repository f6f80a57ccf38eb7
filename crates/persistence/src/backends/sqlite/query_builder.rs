//! SQL query builder for article listings.
//!
//! Translates an [`ArticleQuery`] into a single parameterized `SELECT`.
//! The topic filter is always a bound parameter. Sort column and direction
//! come from closed enums and are mapped to fixed SQL text here, so nothing
//! caller-supplied is ever interpolated.

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

use crate::types::{ArticleQuery, SortColumn};

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone)]
pub struct SqlFragment {
    /// The SQL clause.
    pub sql: String,
    /// Bound parameter values.
    pub params: Vec<SqlParam>,
}

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// String parameter.
    String(String),
    /// Integer parameter.
    Integer(i64),
}

impl SqlParam {
    /// Creates a string parameter.
    pub fn string(s: impl Into<String>) -> Self {
        SqlParam::String(s.into())
    }

    /// Creates an integer parameter.
    pub fn integer(i: i64) -> Self {
        SqlParam::Integer(i)
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlParam::String(s) => ToSqlOutput::from(s.as_str()),
            SqlParam::Integer(i) => ToSqlOutput::from(*i),
        })
    }
}

impl SqlFragment {
    /// Creates a new SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter placeholder and returns the placeholder string.
    pub fn add_param(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("?{}", self.params.len())
    }
}

/// Columns selected for an article summary, in row-mapping order.
pub(crate) const SUMMARY_COLUMNS: &str = "articles.article_id, articles.title, \
     articles.topic, articles.author, articles.created_at, articles.votes, \
     articles.article_img_url";

/// Columns selected for a full article, in row-mapping order.
pub(crate) const ARTICLE_COLUMNS: &str = "articles.article_id, articles.title, \
     articles.topic, articles.author, articles.body, articles.created_at, \
     articles.votes, articles.article_img_url";

const COMMENT_JOIN: &str =
    "FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id";

/// Builds SQL for listing and reading articles.
pub struct ArticleQueryBuilder<'a> {
    query: &'a ArticleQuery,
}

impl<'a> ArticleQueryBuilder<'a> {
    /// Creates a builder for the given listing options.
    pub fn new(query: &'a ArticleQuery) -> Self {
        Self { query }
    }

    /// Builds the complete listing query.
    ///
    /// Each row carries the summary columns followed by `comment_count`,
    /// which counts zero for articles without comments.
    pub fn build(&self) -> SqlFragment {
        let mut fragment = SqlFragment::new(format!(
            "SELECT {}, COUNT(comments.comment_id) AS comment_count {}",
            SUMMARY_COLUMNS, COMMENT_JOIN
        ));

        if let Some(topic) = &self.query.topic {
            let placeholder = fragment.add_param(SqlParam::string(topic));
            fragment
                .sql
                .push_str(&format!(" WHERE articles.topic = {}", placeholder));
        }

        fragment.sql.push_str(" GROUP BY articles.article_id ");
        fragment.sql.push_str(&self.build_order_by());
        fragment
    }

    /// Builds the `ORDER BY` clause.
    ///
    /// No tiebreaker is appended; rows with equal sort keys come back in
    /// whatever order SQLite produces.
    pub fn build_order_by(&self) -> String {
        format!(
            "ORDER BY {} {}",
            Self::sort_column(self.query.sort_by),
            self.query.order.as_sql()
        )
    }

    /// Maps a sort column to the SQL expression it orders by.
    fn sort_column(column: SortColumn) -> &'static str {
        match column {
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Title => "articles.title",
            SortColumn::Topic => "articles.topic",
            SortColumn::Author => "articles.author",
            SortColumn::Body => "articles.body",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::Votes => "articles.votes",
            SortColumn::ArticleImgUrl => "articles.article_img_url",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// Builds the single-article query, with its comment count.
    pub fn build_single(article_id: i64) -> SqlFragment {
        let mut fragment = SqlFragment::new(format!(
            "SELECT {}, COUNT(comments.comment_id) AS comment_count {}",
            ARTICLE_COLUMNS, COMMENT_JOIN
        ));
        let placeholder = fragment.add_param(SqlParam::integer(article_id));
        fragment.sql.push_str(&format!(
            " WHERE articles.article_id = {} GROUP BY articles.article_id",
            placeholder
        ));
        fragment
    }
}

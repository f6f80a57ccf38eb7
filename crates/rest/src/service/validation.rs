//! Request parsing and cross-resource existence checks.
//!
//! The parsing functions reject malformed input before any storage call is
//! made. The `assert_*` checks each cost one read and must be awaited before
//! the operation that depends on them.

use newsboard_persistence::core::NewsStorage;
use newsboard_persistence::types::{Article, NewComment, SortColumn, SortOrder, User};
use serde_json::Value;
use tracing::debug;

use crate::error::{RestError, RestResult};

use super::NewsService;

/// Parses a path identifier.
pub fn parse_id(raw: &str) -> RestResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| RestError::bad_request(format!("'{}' is not a valid identifier", raw)))
}

/// Parses an optional `sort_by` value against the sortable column allowlist.
pub fn parse_sort_column(raw: Option<&str>) -> RestResult<SortColumn> {
    match raw {
        None => Ok(SortColumn::default()),
        Some(raw) => SortColumn::parse(raw).ok_or(RestError::ColumnNotFound),
    }
}

/// Parses an optional `order` value against `asc`, `desc`, `ASC` and `DESC`.
pub fn parse_sort_order(raw: Option<&str>) -> RestResult<SortOrder> {
    match raw {
        None => Ok(SortOrder::default()),
        Some(raw) => SortOrder::parse(raw).ok_or(RestError::InvalidOrder),
    }
}

/// Extracts `inc_votes` from a vote request body.
///
/// Absent or `null` means no change. An integer, or a string holding one, is
/// the delta. Anything else is a bad request.
pub fn parse_vote_delta(body: &Value) -> RestResult<Option<i64>> {
    match body.get("inc_votes") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| RestError::bad_request(format!("inc_votes {} is not an integer", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| RestError::bad_request(format!("inc_votes '{}' is not an integer", s))),
        Some(other) => Err(RestError::bad_request(format!(
            "inc_votes {} is not an integer",
            other
        ))),
    }
}

/// Extracts a new comment from a request body.
///
/// Both `username` and `body` must be present, non-empty strings.
pub fn parse_new_comment(body: &Value) -> RestResult<NewComment> {
    let required = |name: &str| match body.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(_) => Err(RestError::bad_request(format!(
            "'{}' must be a non-empty string",
            name
        ))),
        None => Err(RestError::bad_request(format!("missing '{}'", name))),
    };

    Ok(NewComment::new(required("username")?, required("body")?))
}

impl<S: NewsStorage> NewsService<S> {
    /// Fails with `TopicNotFound` unless a topic has this slug.
    pub async fn assert_topic_exists(&self, slug: &str) -> RestResult<()> {
        match self.storage().read_topic(slug).await? {
            Some(_) => Ok(()),
            None => {
                debug!(slug = %slug, "Topic not found");
                Err(RestError::TopicNotFound)
            }
        }
    }

    /// Fails with `ArticleNotFound` unless an article has this id.
    ///
    /// Returns the article, comment count included.
    pub async fn assert_article_exists(&self, article_id: i64) -> RestResult<Article> {
        self.storage()
            .read_article(article_id)
            .await?
            .ok_or_else(|| {
                debug!(article_id, "Article not found");
                RestError::ArticleNotFound
            })
    }

    /// Fails with `UserNotFound` unless a user has this username.
    pub async fn assert_user_exists(&self, username: &str) -> RestResult<User> {
        self.storage()
            .read_user(username)
            .await?
            .ok_or_else(|| {
                debug!(username = %username, "User not found");
                RestError::UserNotFound
            })
    }
}

//! Core board storage trait.
//!
//! This module defines [`NewsStorage`], the capability the rest of the system
//! consumes from a database: execute one parameterized statement and hand back
//! typed rows, or fail with a [`StorageError`](crate::error::StorageError).
//!
//! Implementations do not decide what an absent row *means*. Lookups return
//! `Option`, deletes report whether a row was removed, and callers turn those
//! into domain errors.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Article, ArticleQuery, ArticleSummary, Comment, NewComment, Topic, User};

/// Storage capability for topics, articles, comments and users.
///
/// # Example
///
/// ```ignore
/// use newsboard_persistence::core::NewsStorage;
/// use newsboard_persistence::types::{ArticleQuery, SortColumn};
///
/// async fn most_voted<S: NewsStorage>(storage: &S) -> StorageResult<()> {
///     let query = ArticleQuery::new().with_sort_by(SortColumn::Votes);
///     for article in storage.list_articles(&query).await? {
///         println!("{} ({} votes)", article.title, article.votes);
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait NewsStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Verifies the backend can serve queries.
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    /// Returns every topic.
    async fn list_topics(&self) -> StorageResult<Vec<Topic>>;

    /// Reads a topic by slug.
    async fn read_topic(&self, slug: &str) -> StorageResult<Option<Topic>>;

    /// Reads a single article, including its derived comment count.
    async fn read_article(&self, article_id: i64) -> StorageResult<Option<Article>>;

    /// Lists article summaries filtered and ordered by `query`.
    ///
    /// A topic filter that matches no rows yields an empty list. Whether the
    /// topic itself exists is the caller's concern.
    async fn list_articles(&self, query: &ArticleQuery) -> StorageResult<Vec<ArticleSummary>>;

    /// Adds `delta` to an article's votes in a single relative update and
    /// returns the updated row without a comment count.
    ///
    /// With `delta` of `None` the statement still runs and leaves the row
    /// unchanged. Returns `None` if no article has that id, and an
    /// [`InputError`](crate::error::InputError) without writing anything if
    /// the new count would not fit in an `i64`.
    async fn increment_votes(
        &self,
        article_id: i64,
        delta: Option<i64>,
    ) -> StorageResult<Option<Article>>;

    /// Lists an article's comments, newest first.
    async fn list_comments(&self, article_id: i64) -> StorageResult<Vec<Comment>>;

    /// Inserts a comment with zero votes and the current time.
    ///
    /// # Errors
    ///
    /// * `StorageError::Constraint(ForeignKeyViolation)` - if the article or
    ///   the author does not exist; `column` is `article_id` or `author`
    async fn create_comment(
        &self,
        article_id: i64,
        comment: &NewComment,
    ) -> StorageResult<Comment>;

    /// Deletes a comment. Returns `true` if a row was removed.
    async fn delete_comment(&self, comment_id: i64) -> StorageResult<bool>;

    /// Returns every user.
    async fn list_users(&self) -> StorageResult<Vec<User>>;

    /// Reads a user by username.
    async fn read_user(&self, username: &str) -> StorageResult<Option<User>>;
}

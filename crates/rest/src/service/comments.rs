//! Comment operations.

use newsboard_persistence::core::NewsStorage;
use newsboard_persistence::types::Comment;
use serde_json::Value;
use tracing::debug;

use crate::error::{RestError, RestResult};

use super::NewsService;
use super::validation::{parse_id, parse_new_comment};

impl<S: NewsStorage> NewsService<S> {
    /// Lists an article's comments, newest first.
    ///
    /// The article must exist; one with no comments yields an empty list.
    pub async fn list_comments(&self, raw_id: &str) -> RestResult<Vec<Comment>> {
        let article_id = parse_id(raw_id)?;
        self.assert_article_exists(article_id).await?;

        let comments = self.storage().list_comments(article_id).await?;
        debug!(article_id, count = comments.len(), "Listed comments");
        Ok(comments)
    }

    /// Adds a comment to an article.
    ///
    /// A missing article or author is reported by storage as a foreign key
    /// violation and translated into `ArticleNotFound` or `UserNotFound`.
    pub async fn create_comment(&self, raw_id: &str, body: &Value) -> RestResult<Comment> {
        let article_id = parse_id(raw_id)?;
        let new_comment = parse_new_comment(body)?;

        let comment = self
            .storage()
            .create_comment(article_id, &new_comment)
            .await?;
        debug!(
            comment_id = comment.comment_id,
            article_id,
            author = %comment.author,
            "Created comment"
        );
        Ok(comment)
    }

    /// Deletes a comment.
    pub async fn delete_comment(&self, raw_id: &str) -> RestResult<()> {
        let comment_id = parse_id(raw_id)?;

        if self.storage().delete_comment(comment_id).await? {
            debug!(comment_id, "Deleted comment");
            Ok(())
        } else {
            Err(RestError::CommentNotFound)
        }
    }
}

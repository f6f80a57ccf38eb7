//! NewsStorage implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::core::NewsStorage;
use crate::error::{ConstraintError, InputError, StorageError, StorageResult};
use crate::types::{Article, ArticleQuery, ArticleSummary, Comment, NewComment, Topic, User};

use super::query_builder::{ArticleQueryBuilder, ARTICLE_COLUMNS};
use super::SqliteBackend;

const COMMENT_COLUMNS: &str = "comment_id, body, article_id, author, votes, created_at";

/// Formats a timestamp the way it is stored: RFC 3339, milliseconds, `Z`.
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn topic_from_row(row: &Row<'_>) -> rusqlite::Result<Topic> {
    Ok(Topic {
        slug: row.get(0)?,
        description: row.get(1)?,
    })
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        username: row.get(0)?,
        name: row.get(1)?,
        avatar_url: row.get(2)?,
    })
}

/// Maps [`ARTICLE_COLUMNS`]; the comment count is left unset.
fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        article_id: row.get(0)?,
        title: row.get(1)?,
        topic: row.get(2)?,
        author: row.get(3)?,
        body: row.get(4)?,
        created_at: timestamp_at(row, 5)?,
        votes: row.get(6)?,
        article_img_url: row.get(7)?,
        comment_count: None,
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<ArticleSummary> {
    Ok(ArticleSummary {
        article_id: row.get(0)?,
        title: row.get(1)?,
        topic: row.get(2)?,
        author: row.get(3)?,
        created_at: timestamp_at(row, 4)?,
        votes: row.get(5)?,
        article_img_url: row.get(6)?,
        comment_count: row.get(7)?,
    })
}

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        comment_id: row.get(0)?,
        body: row.get(1)?,
        article_id: row.get(2)?,
        author: row.get(3)?,
        votes: row.get(4)?,
        created_at: timestamp_at(row, 5)?,
    })
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

fn row_exists(conn: &Connection, sql: &str, key: &dyn rusqlite::ToSql) -> StorageResult<bool> {
    Ok(conn
        .query_row(sql, [key], |_| Ok(()))
        .optional()?
        .is_some())
}

/// Works out which reference of a rejected comment insert was dangling.
///
/// SQLite reports a foreign key failure without naming the column, so the
/// article is checked first and the author second.
fn comment_reference_violation(
    conn: &Connection,
    article_id: i64,
    author: &str,
) -> StorageError {
    let article_exists = match row_exists(
        conn,
        "SELECT 1 FROM articles WHERE article_id = ?1",
        &article_id,
    ) {
        Ok(exists) => exists,
        Err(e) => return e,
    };

    let column = if article_exists { "author" } else { "article_id" };
    tracing::debug!(article_id, author, column, "Comment insert broke a reference");

    StorageError::Constraint(ConstraintError::ForeignKeyViolation {
        table: "comments".to_string(),
        column: column.to_string(),
    })
}

#[async_trait]
impl NewsStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    async fn list_topics(&self) -> StorageResult<Vec<Topic>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare("SELECT slug, description FROM topics")?;
        let topics = stmt
            .query_map([], topic_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(topics)
    }

    async fn read_topic(&self, slug: &str) -> StorageResult<Option<Topic>> {
        let conn = self.get_connection()?;
        let topic = conn
            .query_row(
                "SELECT slug, description FROM topics WHERE slug = ?1",
                params![slug],
                topic_from_row,
            )
            .optional()?;
        Ok(topic)
    }

    async fn read_article(&self, article_id: i64) -> StorageResult<Option<Article>> {
        let conn = self.get_connection()?;
        let fragment = ArticleQueryBuilder::build_single(article_id);
        let article = conn
            .query_row(&fragment.sql, params_from_iter(fragment.params.iter()), |row| {
                let mut article = article_from_row(row)?;
                article.comment_count = Some(row.get(8)?);
                Ok(article)
            })
            .optional()?;
        Ok(article)
    }

    async fn list_articles(&self, query: &ArticleQuery) -> StorageResult<Vec<ArticleSummary>> {
        let conn = self.get_connection()?;
        let fragment = ArticleQueryBuilder::new(query).build();

        tracing::debug!(
            sql = %fragment.sql,
            params = fragment.params.len(),
            "Listing articles"
        );

        let mut stmt = conn.prepare(&fragment.sql)?;
        let articles = stmt
            .query_map(params_from_iter(fragment.params.iter()), summary_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    async fn increment_votes(
        &self,
        article_id: i64,
        delta: Option<i64>,
    ) -> StorageResult<Option<Article>> {
        let conn = self.get_connection()?;
        // An overflowing sum becomes REAL in SQLite; such rows are left untouched.
        let sql = format!(
            "UPDATE articles SET votes = votes + COALESCE(?1, 0) \
             WHERE article_id = ?2 AND typeof(votes + COALESCE(?1, 0)) = 'integer' \
             RETURNING {}",
            ARTICLE_COLUMNS.replace("articles.", "")
        );
        let article = conn
            .query_row(&sql, params![delta, article_id], article_from_row)
            .optional()?;

        if article.is_none()
            && row_exists(
                &conn,
                "SELECT 1 FROM articles WHERE article_id = ?1",
                &article_id,
            )?
        {
            tracing::warn!(article_id, ?delta, "Vote delta would overflow");
            return Err(StorageError::Input(InputError::InvalidInput {
                field: "votes".to_string(),
                message: format!("adding {:?} overflows the vote count", delta),
            }));
        }

        tracing::debug!(article_id, ?delta, found = article.is_some(), "Applied vote delta");
        Ok(article)
    }

    async fn list_comments(&self, article_id: i64) -> StorageResult<Vec<Comment>> {
        let conn = self.get_connection()?;
        let sql = format!(
            "SELECT {} FROM comments WHERE article_id = ?1 ORDER BY created_at DESC",
            COMMENT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let comments = stmt
            .query_map(params![article_id], comment_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    async fn create_comment(
        &self,
        article_id: i64,
        comment: &NewComment,
    ) -> StorageResult<Comment> {
        let conn = self.get_connection()?;
        let now = format_timestamp(&Utc::now());
        let sql = format!(
            "INSERT INTO comments (body, article_id, author, votes, created_at)
             VALUES (?1, ?2, ?3, 0, ?4) RETURNING {}",
            COMMENT_COLUMNS
        );

        match conn.query_row(
            &sql,
            params![comment.body, article_id, comment.author, now],
            comment_from_row,
        ) {
            Ok(created) => {
                tracing::debug!(
                    comment_id = created.comment_id,
                    article_id,
                    "Created comment"
                );
                Ok(created)
            }
            Err(e) if is_foreign_key_violation(&e) => Err(comment_reference_violation(
                &conn,
                article_id,
                &comment.author,
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_comment(&self, comment_id: i64) -> StorageResult<bool> {
        let conn = self.get_connection()?;
        let affected = conn.execute(
            "DELETE FROM comments WHERE comment_id = ?1",
            params![comment_id],
        )?;
        tracing::debug!(comment_id, affected, "Deleted comment");
        Ok(affected > 0)
    }

    async fn list_users(&self) -> StorageResult<Vec<User>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare("SELECT username, name, avatar_url FROM users")?;
        let users = stmt
            .query_map([], user_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    async fn read_user(&self, username: &str) -> StorageResult<Option<User>> {
        let conn = self.get_connection()?;
        let user = conn
            .query_row(
                "SELECT username, name, avatar_url FROM users WHERE username = ?1",
                params![username],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }
}

//! Loading seed datasets into SQLite.

use rusqlite::params;

use crate::error::StorageResult;
use crate::types::SeedData;

use super::storage::format_timestamp;
use super::SqliteBackend;

impl SqliteBackend {
    /// Replaces all board rows with `data` in a single transaction.
    ///
    /// Identity counters are reset, so seeded articles and comments get ids
    /// `1..=N` in the order they appear in `data`.
    pub fn seed(&self, data: &SeedData) -> StorageResult<()> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;

        tx.execute_batch(
            "DELETE FROM comments;
             DELETE FROM articles;
             DELETE FROM users;
             DELETE FROM topics;
             DELETE FROM sqlite_sequence WHERE name IN ('articles', 'comments');",
        )?;

        {
            let mut stmt = tx.prepare("INSERT INTO topics (slug, description) VALUES (?1, ?2)")?;
            for topic in &data.topics {
                stmt.execute(params![topic.slug, topic.description])?;
            }

            let mut stmt =
                tx.prepare("INSERT INTO users (username, name, avatar_url) VALUES (?1, ?2, ?3)")?;
            for user in &data.users {
                stmt.execute(params![user.username, user.name, user.avatar_url])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO articles (title, topic, author, body, created_at, votes, article_img_url)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for article in &data.articles {
                stmt.execute(params![
                    article.title,
                    article.topic,
                    article.author,
                    article.body,
                    format_timestamp(&article.created_at),
                    article.votes,
                    article.article_img_url,
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO comments (body, article_id, author, votes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for comment in &data.comments {
                stmt.execute(params![
                    comment.body,
                    comment.article_id,
                    comment.author,
                    comment.votes,
                    format_timestamp(&comment.created_at),
                ])?;
            }
        }

        tx.commit()?;

        tracing::info!(
            topics = data.topics.len(),
            users = data.users.len(),
            articles = data.articles.len(),
            comments = data.comments.len(),
            "Seeded database"
        );

        Ok(())
    }
}

//! Article operations.

use newsboard_persistence::core::NewsStorage;
use newsboard_persistence::types::{Article, ArticleQuery, ArticleSummary};
use serde_json::Value;
use tracing::debug;

use crate::error::{RestError, RestResult};

use super::NewsService;
use super::validation::{parse_id, parse_sort_column, parse_sort_order, parse_vote_delta};

/// Builds listing options from raw query values.
///
/// Fails with `ColumnNotFound` or `InvalidOrder` for values outside the
/// allowlists. The topic is carried through unchecked.
pub fn build_article_query(
    topic: Option<&str>,
    sort_by: Option<&str>,
    order: Option<&str>,
) -> RestResult<ArticleQuery> {
    let mut query = ArticleQuery::new()
        .with_sort_by(parse_sort_column(sort_by)?)
        .with_order(parse_sort_order(order)?);
    query.topic = topic.map(str::to_string);
    Ok(query)
}

impl<S: NewsStorage> NewsService<S> {
    /// Lists article summaries, optionally filtered by topic and sorted.
    ///
    /// A topic that exists but has no articles yields an empty list; a topic
    /// that does not exist fails with `TopicNotFound`.
    pub async fn list_articles(
        &self,
        topic: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> RestResult<Vec<ArticleSummary>> {
        let query = build_article_query(topic, sort_by, order)?;

        if let Some(topic) = &query.topic {
            self.assert_topic_exists(topic).await?;
        }

        let articles = self.storage().list_articles(&query).await?;
        debug!(
            topic = ?query.topic,
            sort_by = %query.sort_by,
            count = articles.len(),
            "Listed articles"
        );
        Ok(articles)
    }

    /// Fetches a single article with its comment count.
    pub async fn get_article(&self, raw_id: &str) -> RestResult<Article> {
        let article_id = parse_id(raw_id)?;
        self.assert_article_exists(article_id).await
    }

    /// Applies the `inc_votes` delta in `body` to an article.
    ///
    /// Without a delta the article is returned unchanged. The update itself
    /// is a single relative statement.
    pub async fn apply_vote_delta(&self, raw_id: &str, body: &Value) -> RestResult<Article> {
        let article_id = parse_id(raw_id)?;
        let delta = parse_vote_delta(body)?;

        let article = self
            .storage()
            .increment_votes(article_id, delta)
            .await?
            .ok_or(RestError::ArticleNotFound)?;

        debug!(article_id, ?delta, votes = article.votes, "Applied vote delta");
        Ok(article)
    }
}

//! In-memory storage that records which operations were called.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use newsboard_persistence::core::NewsStorage;
use newsboard_persistence::error::{ConstraintError, StorageError, StorageResult};
use newsboard_persistence::types::{
    Article, ArticleQuery, ArticleSummary, Comment, NewComment, Topic, User,
};

use super::NewsService;

pub(crate) struct MockStorage {
    calls: Mutex<Vec<&'static str>>,
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<Comment>>,
}

impl MockStorage {
    /// One topic, one user, article 1 with 100 votes and comment 1.
    pub(crate) fn new() -> Self {
        let created_at = Utc.with_ymd_and_hms(2020, 7, 9, 20, 11, 0).unwrap();
        Self {
            calls: Mutex::new(Vec::new()),
            topics: vec![Topic {
                slug: "cats".to_string(),
                description: "Not dogs".to_string(),
            }],
            users: vec![User {
                username: "lurker".to_string(),
                name: "do_nothing".to_string(),
                avatar_url: String::new(),
            }],
            articles: Mutex::new(vec![Article {
                article_id: 1,
                title: "Living in the shadow of a great man".to_string(),
                topic: "cats".to_string(),
                author: "lurker".to_string(),
                body: "I find this existence challenging".to_string(),
                created_at,
                votes: 100,
                article_img_url: String::new(),
                comment_count: None,
            }]),
            comments: Mutex::new(vec![Comment {
                comment_id: 1,
                body: "Oh, I've got compassion running out of my nose, pal!".to_string(),
                article_id: 1,
                author: "lurker".to_string(),
                votes: 16,
                created_at,
            }]),
        }
    }

    pub(crate) fn service() -> (NewsService<MockStorage>, Arc<MockStorage>) {
        let storage = Arc::new(Self::new());
        (NewsService::new(Arc::clone(&storage)), storage)
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn comment_count(&self, article_id: i64) -> i64 {
        self.comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id)
            .count() as i64
    }
}

fn foreign_key(column: &str) -> StorageError {
    StorageError::Constraint(ConstraintError::ForeignKeyViolation {
        table: "comments".to_string(),
        column: column.to_string(),
    })
}

#[async_trait]
impl NewsStorage for MockStorage {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    async fn list_topics(&self) -> StorageResult<Vec<Topic>> {
        self.record("list_topics");
        Ok(self.topics.clone())
    }

    async fn read_topic(&self, slug: &str) -> StorageResult<Option<Topic>> {
        self.record("read_topic");
        Ok(self.topics.iter().find(|t| t.slug == slug).cloned())
    }

    async fn read_article(&self, article_id: i64) -> StorageResult<Option<Article>> {
        self.record("read_article");
        let article = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.article_id == article_id)
            .cloned();
        Ok(article.map(|mut a| {
            a.comment_count = Some(self.comment_count(article_id));
            a
        }))
    }

    async fn list_articles(&self, query: &ArticleQuery) -> StorageResult<Vec<ArticleSummary>> {
        self.record("list_articles");
        let articles = self.articles.lock().unwrap().clone();
        Ok(articles
            .into_iter()
            .filter(|a| query.topic.as_deref().is_none_or(|t| a.topic == t))
            .map(|a| ArticleSummary {
                comment_count: self.comment_count(a.article_id),
                article_id: a.article_id,
                title: a.title,
                topic: a.topic,
                author: a.author,
                created_at: a.created_at,
                votes: a.votes,
                article_img_url: a.article_img_url,
            })
            .collect())
    }

    async fn increment_votes(
        &self,
        article_id: i64,
        delta: Option<i64>,
    ) -> StorageResult<Option<Article>> {
        self.record("increment_votes");
        let mut articles = self.articles.lock().unwrap();
        Ok(articles
            .iter_mut()
            .find(|a| a.article_id == article_id)
            .map(|a| {
                a.votes += delta.unwrap_or(0);
                a.clone()
            }))
    }

    async fn list_comments(&self, article_id: i64) -> StorageResult<Vec<Comment>> {
        self.record("list_comments");
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn create_comment(
        &self,
        article_id: i64,
        comment: &NewComment,
    ) -> StorageResult<Comment> {
        self.record("create_comment");
        if !self
            .articles
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.article_id == article_id)
        {
            return Err(foreign_key("article_id"));
        }
        if !self.users.iter().any(|u| u.username == comment.author) {
            return Err(foreign_key("author"));
        }

        let mut comments = self.comments.lock().unwrap();
        let created = Comment {
            comment_id: comments.iter().map(|c| c.comment_id).max().unwrap_or(0) + 1,
            body: comment.body.clone(),
            article_id,
            author: comment.author.clone(),
            votes: 0,
            created_at: Utc::now(),
        };
        comments.push(created.clone());
        Ok(created)
    }

    async fn delete_comment(&self, comment_id: i64) -> StorageResult<bool> {
        self.record("delete_comment");
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.comment_id != comment_id);
        Ok(comments.len() < before)
    }

    async fn list_users(&self) -> StorageResult<Vec<User>> {
        self.record("list_users");
        Ok(self.users.clone())
    }

    async fn read_user(&self, username: &str) -> StorageResult<Option<User>> {
        self.record("read_user");
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}

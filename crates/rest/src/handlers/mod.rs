//! HTTP request handlers.
//!
//! - [`api`] - Endpoint documentation
//! - [`topics`] - List topics
//! - [`articles`] - List, read and vote on articles
//! - [`comments`] - List, create and delete comments
//! - [`users`] - List and read users
//! - [`health`] - Health check endpoint
//! - [`fallback`] - Catch-all for unmatched routes
//!
//! Handlers only unpack the request and shape the response; every decision
//! is made by [`NewsService`](crate::service::NewsService).

pub mod api;
pub mod articles;
pub mod comments;
pub mod fallback;
pub mod health;
pub mod topics;
pub mod users;

// Re-export handlers for convenience
pub use api::endpoints_handler;
pub use articles::{get_article_handler, list_articles_handler, patch_article_handler};
pub use comments::{create_comment_handler, delete_comment_handler, list_comments_handler};
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use topics::list_topics_handler;
pub use users::{get_user_handler, list_users_handler};

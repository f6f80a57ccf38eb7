//! Newsboard route configuration.
//!
//! Defines all routes for the Newsboard REST API.

use axum::{
    Router,
    routing::{delete, get},
};
use newsboard_persistence::core::NewsStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all Newsboard REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## API
/// - `GET /api` - Endpoint documentation
/// - `GET /api/topics` - List topics
/// - `GET /api/articles` - List articles
/// - `GET /api/articles/{article_id}` - Read an article
/// - `PATCH /api/articles/{article_id}` - Vote on an article
/// - `GET /api/articles/{article_id}/comments` - List comments
/// - `POST /api/articles/{article_id}/comments` - Add a comment
/// - `DELETE /api/comments/{comment_id}` - Delete a comment
/// - `GET /api/users` - List users
/// - `GET /api/users/{username}` - Read a user
///
/// Any other path, or an unsupported method on a known path, answers
/// `404 {"msg": "Not found"}`.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: NewsStorage + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        // API routes
        .route("/api", get(handlers::endpoints_handler))
        .route("/api/topics", get(handlers::list_topics_handler::<S>))
        .route("/api/articles", get(handlers::list_articles_handler::<S>))
        .route(
            "/api/articles/{article_id}",
            get(handlers::get_article_handler::<S>).patch(handlers::patch_article_handler::<S>),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(handlers::list_comments_handler::<S>)
                .post(handlers::create_comment_handler::<S>),
        )
        .route(
            "/api/comments/{comment_id}",
            delete(handlers::delete_comment_handler::<S>),
        )
        .route("/api/users", get(handlers::list_users_handler::<S>))
        .route("/api/users/{username}", get(handlers::get_user_handler::<S>))
        // Everything else
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::not_found_handler)
        .with_state(state)
}

//! Comment handlers.
//!
//! - `GET [base]/api/articles/{article_id}/comments`
//! - `POST [base]/api/articles/{article_id}/comments`
//! - `DELETE [base]/api/comments/{comment_id}`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use newsboard_persistence::core::NewsStorage;
use serde_json::json;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// Handler listing an article's comments, newest first.
///
/// # Response
///
/// - `200 OK` - `{"comments": [...]}`, empty if the article has none
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No such article
pub async fn list_comments_handler<S>(
    State(state): State<AppState<S>>,
    PathParam(article_id): PathParam,
) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!(article_id = %article_id, "Processing list comments request");

    let comments = state.service().list_comments(&article_id).await?;

    Ok((StatusCode::OK, Json(json!({ "comments": comments }))).into_response())
}

/// Handler adding a comment to an article.
///
/// # Request Body
///
/// `{"username": <string>, "body": <string>}`, both required and non-empty.
///
/// # Response
///
/// - `201 Created` - `{"comment": {...}}`
/// - `400 Bad Request` - Non-numeric id, or a missing or empty field
/// - `404 Not Found` - No such article or user
pub async fn create_comment_handler<S>(
    State(state): State<AppState<S>>,
    PathParam(article_id): PathParam,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!(article_id = %article_id, "Processing create comment request");

    let comment = state.service().create_comment(&article_id, &body).await?;

    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))).into_response())
}

/// Handler deleting a comment.
///
/// # Response
///
/// - `204 No Content` - Comment deleted
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No such comment
pub async fn delete_comment_handler<S>(
    State(state): State<AppState<S>>,
    PathParam(comment_id): PathParam,
) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!(comment_id = %comment_id, "Processing delete comment request");

    state.service().delete_comment(&comment_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

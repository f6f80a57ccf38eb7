//! Article handlers.
//!
//! - `GET [base]/api/articles?topic&sort_by&order`
//! - `GET [base]/api/articles/{article_id}`
//! - `PATCH [base]/api/articles/{article_id}`

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
use crate::extractors::{ArticleListParams, JsonBody, PathParam};
use crate::state::AppState;

/// Handler listing article summaries.
///
/// # Query Parameters
///
/// - `topic` - Topic slug to filter by; must name an existing topic
/// - `sort_by` - One of the sortable columns (default `created_at`)
/// - `order` (or `order_by`) - `asc`, `desc`, `ASC` or `DESC` (default `DESC`)
///
/// # Response
///
/// - `200 OK` - `{"articles": [...]}`, possibly empty
/// - `404 Not Found` - Unknown topic, sort column or direction
pub async fn list_articles_handler<S>(
    State(state): State<AppState<S>>,
    params: ArticleListParams,
) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!(
        topic = ?params.topic,
        sort_by = ?params.sort_by,
        order = ?params.order,
        "Processing list articles request"
    );

    let articles = state
        .service()
        .list_articles(
            params.topic.as_deref(),
            params.sort_by.as_deref(),
            params.order.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(json!({ "articles": articles }))).into_response())
}

/// Handler reading a single article.
///
/// # Response
///
/// - `200 OK` - `{"article": {...}}` including `body` and `comment_count`
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No such article
pub async fn get_article_handler<S>(
    State(state): State<AppState<S>>,
    PathParam(article_id): PathParam,
) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!(article_id = %article_id, "Processing get article request");

    let article = state.service().get_article(&article_id).await?;

    Ok((StatusCode::OK, Json(json!({ "article": article }))).into_response())
}

/// Handler applying a vote delta to an article.
///
/// # Request Body
///
/// `{"inc_votes": <integer>}`; without `inc_votes` the article is unchanged.
///
/// # Response
///
/// - `200 OK` - `{"article": {...}}`
/// - `400 Bad Request` - Non-numeric id or non-integer `inc_votes`
/// - `404 Not Found` - No such article
pub async fn patch_article_handler<S>(
    State(state): State<AppState<S>>,
    PathParam(article_id): PathParam,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!(article_id = %article_id, "Processing patch article request");

    let article = state.service().apply_vote_delta(&article_id, &body).await?;

    Ok((StatusCode::OK, Json(json!({ "article": article }))).into_response())
}

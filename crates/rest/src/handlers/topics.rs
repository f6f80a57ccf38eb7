//! Topic handlers.
//!
//! `GET [base]/api/topics`

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
use crate::state::AppState;

/// Handler listing every topic.
///
/// # Response
///
/// - `200 OK` - `{"topics": [...]}`
pub async fn list_topics_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!("Processing list topics request");

    let topics = state.service().list_topics().await?;

    Ok((StatusCode::OK, Json(json!({ "topics": topics }))).into_response())
}

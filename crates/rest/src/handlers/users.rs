//! User handlers.
//!
//! - `GET [base]/api/users`
//! - `GET [base]/api/users/{username}`

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
use crate::extractors::PathParam;
use crate::state::AppState;

/// Handler listing every user.
pub async fn list_users_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!("Processing list users request");

    let users = state.service().list_users().await?;

    Ok((StatusCode::OK, Json(json!({ "users": users }))).into_response())
}

/// Handler reading a single user.
///
/// # Response
///
/// - `200 OK` - `{"user": {...}}`
/// - `404 Not Found` - No such user
pub async fn get_user_handler<S>(
    State(state): State<AppState<S>>,
    PathParam(username): PathParam,
) -> RestResult<Response>
where
    S: NewsStorage + Send + Sync,
{
    debug!(username = %username, "Processing get user request");

    let user = state.service().get_user(&username).await?;

    Ok((StatusCode::OK, Json(json!({ "user": user }))).into_response())
}

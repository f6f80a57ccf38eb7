//! Error types for the Newsboard REST API.
//!
//! Every failure leaves the server as a JSON body `{"msg": "..."}` whose
//! message is drawn from a fixed vocabulary. Nothing else is returned: no
//! storage text, no field names, no stack traces.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Message |
//! |-------|-------------|---------|
//! | TopicNotFound | 404 | Topic does not exist |
//! | ArticleNotFound | 404 | Article does not exist |
//! | UserNotFound | 404 | User does not exist |
//! | CommentNotFound | 404 | Comment does not exist |
//! | ColumnNotFound | 404 | Column does not exist |
//! | InvalidOrder | 404 | Invalid order_by |
//! | BadRequest | 400 | Bad request |
//! | NotFound | 404 | Not found |
//! | RequestTimeout | 408 | Request timed out |
//!
//! Storage errors are translated by [`From<StorageError>`]: a foreign key
//! violation on the `author` column becomes `UserNotFound`, any other foreign
//! key violation becomes `ArticleNotFound`, and everything else becomes
//! `BadRequest`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use newsboard_persistence::error::StorageError;
use thiserror::Error;
use tracing::{debug, error};

/// The primary error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// No topic has the requested slug (HTTP 404).
    #[error("Topic does not exist")]
    TopicNotFound,

    /// No article has the requested id (HTTP 404).
    #[error("Article does not exist")]
    ArticleNotFound,

    /// No user has the requested username (HTTP 404).
    #[error("User does not exist")]
    UserNotFound,

    /// No comment has the requested id (HTTP 404).
    #[error("Comment does not exist")]
    CommentNotFound,

    /// The requested sort column is not sortable (HTTP 404).
    #[error("Column does not exist")]
    ColumnNotFound,

    /// The requested sort direction is not recognised (HTTP 404).
    #[error("Invalid order_by")]
    InvalidOrder,

    /// Malformed client input (HTTP 400).
    ///
    /// `reason` is logged but never sent to the client.
    #[error("Bad request")]
    BadRequest {
        /// What was wrong with the request.
        reason: String,
    },

    /// No route matches the request (HTTP 404).
    #[error("Not found")]
    NotFound,

    /// The request did not finish within the configured timeout (HTTP 408).
    #[error("Request timed out")]
    RequestTimeout,
}

impl RestError {
    /// Creates a bad request error with a diagnostic reason.
    pub fn bad_request(reason: impl Into<String>) -> Self {
        RestError::BadRequest {
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::TopicNotFound
            | RestError::ArticleNotFound
            | RestError::UserNotFound
            | RestError::CommentNotFound
            | RestError::ColumnNotFound
            | RestError::InvalidOrder
            | RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }

    /// Returns the client-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            RestError::TopicNotFound => "Topic does not exist",
            RestError::ArticleNotFound => "Article does not exist",
            RestError::UserNotFound => "User does not exist",
            RestError::CommentNotFound => "Comment does not exist",
            RestError::ColumnNotFound => "Column does not exist",
            RestError::InvalidOrder => "Invalid order_by",
            RestError::BadRequest { .. } => "Bad request",
            RestError::NotFound => "Not found",
            RestError::RequestTimeout => "Request timed out",
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        if let RestError::BadRequest { reason } = &self {
            debug!(reason = %reason, "Rejecting bad request");
        }

        let body = serde_json::json!({ "msg": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err.foreign_key_column() {
            Some("author") => RestError::UserNotFound,
            Some(_) => RestError::ArticleNotFound,
            None => {
                error!(error = %err, "Storage error translated to bad request");
                RestError::bad_request(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::bad_request(rejection.body_text())
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

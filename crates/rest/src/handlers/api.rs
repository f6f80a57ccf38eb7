//! Endpoint documentation handler.
//!
//! `GET [base]/api`

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Static description of every endpoint, wrapped as `{"endpoints": {...}}`.
pub const ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

/// Handler serving the endpoint documentation.
///
/// # Response
///
/// - `200 OK` - `{"endpoints": {"GET /api/topics": {...}, ...}}`
pub async fn endpoints_handler() -> Response {
    debug!("Processing endpoints request");
    ([(header::CONTENT_TYPE, "application/json")], ENDPOINTS_JSON).into_response()
}

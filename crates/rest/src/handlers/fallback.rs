//! Catch-all handler for unmatched routes.

use axum::http::{Method, Uri};
use tracing::debug;

use crate::error::RestError;

/// Handler for any path or method no route matches.
///
/// # Response
///
/// - `404 Not Found` - `{"msg": "Not found"}`
pub async fn not_found_handler(method: Method, uri: Uri) -> RestError {
    debug!(method = %method, uri = %uri, "No route matched");
    RestError::NotFound
}

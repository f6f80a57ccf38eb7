//! JSON request body extractor.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde_json::{Map, Value};

use crate::error::RestError;

/// Axum extractor for a JSON request body.
///
/// An empty body is read as an empty object, so handlers see absent fields
/// rather than a parse failure. A body that is present but not valid JSON is
/// a bad request. The content type is not enforced.
///
/// # Example
///
/// ```rust,ignore
/// use newsboard_rest::extractors::JsonBody;
///
/// async fn vote_handler(JsonBody(body): JsonBody) {
///     println!("inc_votes = {:?}", body.get("inc_votes"));
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none")
            .to_string();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RestError::bad_request(format!("Unreadable body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            RestError::bad_request(format!(
                "Invalid JSON body (content type {}): {}",
                content_type, e
            ))
        })
    }
}

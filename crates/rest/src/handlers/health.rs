//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use newsboard_persistence::core::NewsStorage;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs the backend's own health check.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
/// - `503 Service Unavailable` - Storage is unreachable
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: NewsStorage + Send + Sync,
{
    debug!("Processing health check request");

    let backend_name = state.storage().backend_name();

    let (status, label) = match state.storage().health_check().await {
        Ok(()) => (StatusCode::OK, "healthy"),
        Err(e) => {
            warn!(error = %e, backend = backend_name, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    };

    let health_response = serde_json::json!({
        "status": label,
        "backend": backend_name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (status, Json(health_response)).into_response()
}

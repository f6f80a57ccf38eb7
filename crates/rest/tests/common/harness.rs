//! REST API test harness.
//!
//! Provides a test server over an in-memory SQLite database seeded with the
//! bundled dataset.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use newsboard_persistence::backends::sqlite::SqliteBackend;
use newsboard_persistence::types::SeedData;
use serde_json::Value;

use newsboard_rest::{AppState, ServerConfig, routing};

/// The dataset every harness starts from.
pub const TEST_DATA: &str = include_str!("../../../persistence/data/test-data.json");

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::new();
///
///     let response = harness.get("/api/articles/1").await;
///
///     assert_eq!(response.status_code(), 200);
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend, shared with the server.
    pub backend: Arc<SqliteBackend>,

    /// The dataset the backend was seeded with.
    pub data: SeedData,
}

impl RestTestHarness {
    /// Creates a harness with a freshly seeded database.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a freshly seeded database and custom config.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");

        let data = SeedData::from_json_str(TEST_DATA).expect("Failed to parse seed data");
        backend.seed(&data).expect("Failed to seed database");

        let backend = Arc::new(backend);
        let state = AppState::new(Arc::clone(&backend), config);
        let app = routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            data,
        }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PATCH request with JSON body.
    pub async fn patch(&self, path: &str, body: Value) -> TestResponse {
        self.server.patch(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }
}

//! # newsboard-rest - Newsboard REST API
//!
//! This crate provides the HTTP surface of the Newsboard discussion board:
//! topics, articles with derived comment counts, vote updates, comments and
//! users, served as JSON by an Axum router.
//!
//! ## Backend Support
//!
//! Storage backends are configured through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newsboard_rest::{create_app, ServerConfig};
//! use newsboard_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a storage backend
//!     let backend = SqliteBackend::open("newsboard.db")?;
//!     backend.init_schema()?;
//!
//!     // Create the Axum application
//!     let app = create_app(backend);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:9090").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | endpoints | GET | `/api` | 200 |
//! | list topics | GET | `/api/topics` | 200 |
//! | list articles | GET | `/api/articles?topic&sort_by&order` | 200 |
//! | read article | GET | `/api/articles/{article_id}` | 200 |
//! | vote | PATCH | `/api/articles/{article_id}` | 200 |
//! | list comments | GET | `/api/articles/{article_id}/comments` | 200 |
//! | add comment | POST | `/api/articles/{article_id}/comments` | 201 |
//! | delete comment | DELETE | `/api/comments/{comment_id}` | 204 |
//! | list users | GET | `/api/users` | 200 |
//! | read user | GET | `/api/users/{username}` | 200 |
//! | health | GET | `/health` | 200 |
//!
//! ## Error Handling
//!
//! All errors are returned as `{"msg": "..."}` with a message from a fixed
//! vocabulary; see [`error`] for the full mapping.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and storage error translation
//! - [`config`] - Server configuration
//! - [`state`] - Application state (service, configuration)
//! - [`service`] - Domain operations, input validation and existence checks
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for request bodies and query strings
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use service::NewsService;
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{BoxError, Router, error_handling::HandleErrorLayer, extract::DefaultBodyLimit};
use newsboard_persistence::core::NewsStorage;
use tower::{ServiceBuilder, timeout::TimeoutLayer, timeout::error::Elapsed};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: NewsStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete REST API with all handlers,
/// middleware, and configuration.
///
/// # Example
///
/// ```rust,ignore
/// use newsboard_rest::{create_app_with_config, ServerConfig};
/// use newsboard_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: NewsStorage + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    // Build the router with all routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Converts a middleware failure into a `{"msg": ...}` response.
///
/// The router itself is infallible, so the only error reaching here is an
/// elapsed request timeout.
async fn handle_middleware_error(err: BoxError) -> RestError {
    if err.is::<Elapsed>() {
        warn!("Request timed out");
        RestError::RequestTimeout
    } else {
        warn!(error = %err, "Middleware error");
        RestError::bad_request(err.to_string())
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "newsboard_rest={level},newsboard_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

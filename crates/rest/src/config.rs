//! Server configuration for the Newsboard REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NEWSBOARD_PORT` | 9090 | Server port |
//! | `NEWSBOARD_HOST` | 127.0.0.1 | Host to bind |
//! | `NEWSBOARD_LOG_LEVEL` | info | Log level |
//! | `NEWSBOARD_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `NEWSBOARD_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `NEWSBOARD_ENABLE_CORS` | true | Enable CORS |
//! | `NEWSBOARD_CORS_ORIGINS` | * | Allowed origins |
//! | `NEWSBOARD_CORS_METHODS` | GET,POST,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `NEWSBOARD_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `NEWSBOARD_DATABASE_URL` | newsboard.db | SQLite path or `:memory:` |
//! | `NEWSBOARD_SEED_FILE` | (none) | JSON dataset loaded at startup |
//!
//! # Example
//!
//! ```rust
//! use newsboard_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use clap::Parser;

/// Default SQLite database path when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "newsboard.db";

/// Server configuration for the Newsboard REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "newsboard")]
#[command(about = "Newsboard discussion board API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "NEWSBOARD_PORT", default_value = "9090")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "NEWSBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "NEWSBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "NEWSBOARD_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "NEWSBOARD_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "NEWSBOARD_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "NEWSBOARD_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "NEWSBOARD_CORS_METHODS",
        default_value = "GET,POST,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "NEWSBOARD_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// SQLite database path, or `:memory:`.
    #[arg(long, env = "NEWSBOARD_DATABASE_URL")]
    pub database_url: Option<String>,

    /// JSON dataset to load into the database at startup.
    #[arg(long, env = "NEWSBOARD_SEED_FILE")]
    pub seed_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 9090,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            database_url: None,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["newsboard"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured database path, or the default.
    pub fn database_path(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if matches!(self.database_url.as_deref(), Some("")) {
            errors.push("Database URL cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and an in-memory database, and disables
    /// features that might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            database_url: Some(":memory:".to_string()),
            seed_file: None,
        }
    }
}

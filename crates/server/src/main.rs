//! Newsboard Server
//!
//! Serves the Newsboard discussion board REST API.

use clap::Parser;
use newsboard_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "sqlite")]
use newsboard_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};
#[cfg(feature = "sqlite")]
use newsboard_persistence::types::SeedData;

/// Creates and initializes a SQLite backend from the server configuration.
///
/// When a seed file is configured, the database is reset to its contents.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_path();
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = SqliteBackend::with_config(db_path, SqliteBackendConfig::default())?;
    backend.init_schema()?;

    if let Some(seed_file) = &config.seed_file {
        info!(seed_file = %seed_file, "Seeding database");
        let data = SeedData::from_file(seed_file)?;
        backend.seed(&data)?;
    }

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        database = %config.database_path(),
        "Starting Newsboard Server"
    );

    start(config).await
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when the sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "No storage backend compiled in. \
         Build with: cargo build -p newsboard-server --features sqlite"
    )
}

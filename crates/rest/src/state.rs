//! Application state for the Newsboard REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the domain service (which owns the storage backend) and
//! the server configuration.

use std::sync::Arc;

use newsboard_persistence::core::NewsStorage;

use crate::config::ServerConfig;
use crate::service::NewsService;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`NewsStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use newsboard_rest::{AppState, ServerConfig};
/// use newsboard_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig::default();
/// let state = AppState::new(Arc::new(backend), config);
/// ```
pub struct AppState<S> {
    /// Domain operations over the storage backend.
    service: NewsService<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: NewsStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            service: NewsService::new(storage),
            config: Arc::new(config),
        }
    }

    /// Returns the domain service.
    pub fn service(&self) -> &NewsService<S> {
        &self.service
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        self.service.storage()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

//! Domain operations behind the HTTP handlers.
//!
//! [`NewsService`] owns the storage handle and implements every operation the
//! API exposes. Each operation parses its raw inputs first, then runs any
//! existence checks, then issues its primary storage call, strictly in that
//! order. A failed check therefore always wins over the primary call.
//!
//! - [`articles`] - listing, single fetch and vote updates
//! - [`comments`] - listing, creation and deletion
//! - [`topics`] and [`users`] - plain listings and lookups
//! - [`validation`] - input parsing and `assert_*_exists` checks

use std::sync::Arc;

use newsboard_persistence::core::NewsStorage;

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
pub mod validation;

#[cfg(test)]
pub(crate) mod mock;

pub use validation::{
    parse_id, parse_new_comment, parse_sort_column, parse_sort_order, parse_vote_delta,
};

/// The discussion board's domain operations over a storage backend.
pub struct NewsService<S> {
    storage: Arc<S>,
}

impl<S> Clone for NewsService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: NewsStorage> NewsService<S> {
    /// Creates a service over the given storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

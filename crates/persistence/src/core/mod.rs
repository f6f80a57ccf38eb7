//! Core storage traits and abstractions.
//!
//! - [`NewsStorage`] - typed queries over topics, articles, comments and users
//!
//! Backends implement [`NewsStorage`]; the HTTP layer is generic over it, so
//! tests can substitute an in-memory SQLite database or a hand-written mock.

mod storage;

pub use storage::NewsStorage;

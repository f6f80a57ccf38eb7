//! Common test utilities for REST API testing.
//!
//! - [`harness`] - REST API test harness backed by a seeded SQLite database
//! - [`assertions`] - HTTP response assertions

pub mod assertions;
pub mod harness;

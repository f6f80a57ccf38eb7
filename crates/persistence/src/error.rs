//! Error types for the persistence layer.
//!
//! Storage failures are split into three families so that callers never have
//! to inspect driver-specific codes or message text:
//!
//! - [`ConstraintError`] - a write was rejected by a referential constraint
//! - [`InputError`] - a value handed to storage could not be interpreted
//! - [`BackendError`] - the database itself failed (connection, pool, query)

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Referential integrity errors
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// Malformed input errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns the column that triggered a foreign-key violation, if this is one.
    pub fn foreign_key_column(&self) -> Option<&str> {
        match self {
            StorageError::Constraint(ConstraintError::ForeignKeyViolation { column, .. }) => {
                Some(column.as_str())
            }
            _ => None,
        }
    }
}

/// Errors raised when a write breaks a referential constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A referenced row does not exist.
    ///
    /// `column` names the referencing column on `table` (for example
    /// `comments.author`), so callers can tell which reference failed.
    #[error("foreign key violation on {table}.{column}")]
    ForeignKeyViolation { table: String, column: String },

    /// A required column was given no value.
    #[error("not null violation on {table}.{column}")]
    NotNullViolation { table: String, column: String },
}

/// Errors raised when storage cannot interpret a supplied value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A value was not valid for the column it targets.
    #[error("invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::Internal {
            backend_name: "unknown".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        let field = match &err {
            rusqlite::Error::InvalidColumnType(_, name, _) => Some(name.clone()),
            rusqlite::Error::FromSqlConversionFailure(index, _, _) => {
                Some(format!("column {}", index))
            }
            rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::TypeMismatch => {
                Some("value".to_string())
            }
            _ => None,
        };

        match field {
            Some(field) => StorageError::Input(InputError::InvalidInput {
                field,
                message: err.to_string(),
            }),
            None => StorageError::Backend(BackendError::Internal {
                backend_name: "sqlite".to_string(),
                message: err.to_string(),
                source: Some(Box::new(err)),
            }),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

//! Error types for lazydb

use thiserror::Error;

/// Result type alias for lazydb operations
pub type DbResult<T> = Result<T, DbError>;

/// Error types for query building and database operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection error (handshake, auth, encoding setup)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution error, wrapping the driver's error verbatim
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// `execute` called without a prior `prepare` on this connection
    #[error("Query is not prepared before execution")]
    NotPrepared,

    /// Failure while draining a result set
    #[error("Fetch error on column '{column}': {message}")]
    Fetch { column: String, message: String },

    /// Caller error (bad ORDER BY direction, parameter mismatch, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A mandatory clause is missing from the statement being rendered
    #[error("Incomplete statement: {0}")]
    Incomplete(String),
}

impl DbError {
    /// Create a fetch error for a specific column
    pub fn fetch(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an incomplete statement error
    pub fn incomplete(message: impl Into<String>) -> Self {
        Self::Incomplete(message.into())
    }

    /// Check if this is an incomplete statement error
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete(_))
    }

    /// Check if this is a connection error
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Wrap a driver error, routing connection-phase failures into
    /// [`DbError::Connection`] and everything else into [`DbError::Query`]
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if err.is_closed() {
            return Self::Connection(err.to_string());
        }
        Self::Query(err)
    }
}

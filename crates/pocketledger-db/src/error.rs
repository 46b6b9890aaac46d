//! Database error types

use thiserror::Error;

/// Database operation errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),

    /// The requested row does not exist for the given owner. Rows owned
    /// by a different account surface as this same error so that
    /// existence cannot be probed across owners.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Serialization(e.to_string())
    }
}

impl DbError {
    /// True for faults that should be logged server-side and hidden
    /// from clients.
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            DbError::Connection(_)
                | DbError::Schema(_)
                | DbError::Query(_)
                | DbError::Serialization(_)
        )
    }
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

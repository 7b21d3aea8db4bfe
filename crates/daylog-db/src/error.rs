//! Database error types for daylog-db.

use daylog_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The addressed row does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A UNIQUE constraint rejected the write.
    #[error("{0}")]
    Conflict(String),

    /// Input rejected before any SQL ran.
    #[error("{0}")]
    Validation(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Conflict(msg) => Self::Conflict(msg),
            CoreError::NotFound { entity_type, id } => Self::NotFound {
                entity: entity_type,
                id,
            },
            CoreError::Other(e) => Self::Other(e),
        }
    }
}

/// SQLite reports constraint failures only through the message text, e.g.
/// `UNIQUE constraint failed: entry_types.name`.
pub(crate) fn is_unique_violation(e: &libsql::Error, column: &str) -> bool {
    let message = e.to_string();
    message.contains("UNIQUE constraint failed") && message.contains(column)
}

pub(crate) fn is_foreign_key_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("FOREIGN KEY constraint failed")
}

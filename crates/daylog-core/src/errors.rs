//! Cross-cutting error types for daylog.
//!
//! Storage errors (`DatabaseError`) live in `daylog-db`; HTTP mapping
//! (`ApiError`) lives in `daylog-server`. `CoreError` covers what can be
//! decided without touching the database.

use thiserror::Error;

/// Errors that can be raised by any daylog crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A uniqueness rule was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Input failed validation (missing field, bad format).
    #[error("{0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

//! HTTP error mapping.
//!
//! Client mistakes keep their message. Store failures are logged in full and
//! answered with a fixed per-operation message so no SQL detail leaks.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use daylog_core::errors::CoreError;
use daylog_core::responses::ErrorResponse;
use daylog_db::error::DatabaseError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translate a store failure. `context` is the message clients see when
    /// the failure is internal.
    #[must_use]
    pub fn from_db(error: DatabaseError, context: &str) -> Self {
        match error {
            DatabaseError::Validation(msg) => Self::InvalidInput(msg),
            DatabaseError::Conflict(msg) => Self::Conflict(msg),
            DatabaseError::NotFound { entity, .. } => Self::NotFound(not_found_message(&entity)),
            other => {
                tracing::error!(error = %other, "{context}");
                Self::Internal(context.to_string())
            }
        }
    }
}

/// `"entry"` -> `"Entry not found"`.
fn not_found_message(entity: &str) -> String {
    let mut chars = entity.chars();
    chars.next().map_or_else(
        || "Not found".to_string(),
        |first| format!("{}{} not found", first.to_uppercase(), chars.as_str()),
    )
}

/// Attach the client-facing message to a repo call.
pub trait DbResultExt<T> {
    /// # Errors
    ///
    /// Returns the mapped `ApiError` when the repo call failed.
    fn or_api(self, context: &str) -> Result<T, ApiError>;
}

impl<T> DbResultExt<T> for Result<T, DatabaseError> {
    fn or_api(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_db(e, context))
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::InvalidInput(msg),
            CoreError::Conflict(msg) => Self::Conflict(msg),
            CoreError::NotFound { entity_type, .. } => {
                Self::NotFound(not_found_message(&entity_type))
            }
            CoreError::Other(e) => {
                tracing::error!(error = %e, "unexpected validation failure");
                Self::Internal("Internal server error".into())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidInput(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_found_names_the_entity() {
        let error = ApiError::from_db(
            DatabaseError::NotFound {
                entity: "entry".into(),
                id: "ent-00000000".into(),
            },
            "Failed to fetch entry",
        );
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "Entry not found");
    }

    #[test]
    fn store_failures_hide_details() {
        let error = ApiError::from_db(
            DatabaseError::Query("near \"SELEC\": syntax error".into()),
            "Failed to fetch entries",
        );
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Failed to fetch entries");
    }

    #[test]
    fn conflict_and_validation_keep_their_message() {
        let conflict = ApiError::from_db(
            DatabaseError::Conflict("Type name already exists".into()),
            "Failed to create type",
        );
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        assert_eq!(conflict.to_string(), "Type name already exists");

        let invalid: ApiError = CoreError::Validation("Date and type are required".into()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "Date and type are required");
    }
}

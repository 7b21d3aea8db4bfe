//! `/api/types`

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use daylog_core::entities::EntryType;
use daylog_core::inputs::EntryTypeRequest;

use crate::error::{ApiError, DbResultExt};
use crate::state::AppState;

/// All types, alphabetical.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<EntryType>>, ApiError> {
    let types = state
        .service
        .list_entry_types()
        .await
        .or_api("Failed to fetch types")?;
    Ok(Json(types))
}

/// Create a type; 409 when the trimmed name is taken.
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EntryTypeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EntryType>), ApiError> {
    let Json(request) = payload?;
    let name = request.name.unwrap_or_default();
    let created = state
        .service
        .create_entry_type(&name)
        .await
        .or_api("Failed to create type")?;
    Ok((StatusCode::CREATED, Json(created)))
}

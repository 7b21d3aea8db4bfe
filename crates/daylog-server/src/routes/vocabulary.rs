//! `/api/vocabulary`

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use daylog_core::entities::VocabularyWithEntry;
use daylog_core::inputs::VocabularyBatchRequest;
use daylog_core::responses::VocabularyBatchResponse;

use crate::error::{ApiError, DbResultExt};
use crate::state::AppState;

pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VocabularyWithEntry>>, ApiError> {
    let items = state
        .service
        .list_vocabulary()
        .await
        .or_api("Failed to fetch vocabulary")?;
    Ok(Json(items))
}

/// Store the complete pairs for one entry and report how many landed.
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VocabularyBatchRequest>, JsonRejection>,
) -> Result<Json<VocabularyBatchResponse>, ApiError> {
    let Json(request) = payload?;
    let (entry_id, items) = request.parts()?;
    let count = state
        .service
        .create_vocabulary_batch(entry_id, items)
        .await
        .or_api("Failed to create vocabulary")?;
    Ok(Json(VocabularyBatchResponse {
        success: true,
        count,
    }))
}

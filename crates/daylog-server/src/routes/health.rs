use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use daylog_core::responses::HealthResponse;

use crate::error::{ApiError, DbResultExt};
use crate::state::AppState;

/// `GET /api/health`: 200 once the database answers.
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    state.service.db().ping().await.or_api("Database unavailable")?;
    Ok(Json(HealthResponse {
        status: "ok".into(),
    }))
}

//! `/api/entries` and `/api/entries/{id}`

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use daylog_core::entities::{EntryDetail, EntryWithType};
use daylog_core::filter::{EntryFilter, EntryQuery};
use daylog_core::grouping::group_by_type;
use daylog_core::inputs::{EntryInput, EntryRequest};
use daylog_core::responses::{GroupedEntriesResponse, SuccessResponse};

use crate::error::{ApiError, DbResultExt};
use crate::state::AppState;

async fn filtered(
    state: &AppState,
    query: Result<Query<EntryQuery>, QueryRejection>,
) -> Result<Vec<EntryWithType>, ApiError> {
    let Query(query) = query?;
    let filter = EntryFilter::from_query(&query)?;
    state
        .service
        .list_entries(&filter)
        .await
        .or_api("Failed to fetch entries")
}

/// Entries matching `date`, `type`, and `difficulty`, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EntryQuery>, QueryRejection>,
) -> Result<Json<Vec<EntryWithType>>, ApiError> {
    Ok(Json(filtered(&state, query).await?))
}

/// Same filters as [`list`], bucketed by type name.
pub async fn grouped(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EntryQuery>, QueryRejection>,
) -> Result<Json<GroupedEntriesResponse>, ApiError> {
    let entries = filtered(&state, query).await?;
    Ok(Json(group_by_type(entries).into()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EntryDetail>, ApiError> {
    let entry = state
        .service
        .get_entry(&id)
        .await
        .or_api("Failed to fetch entry")?;
    Ok(Json(entry))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EntryWithType>), ApiError> {
    let Json(request) = payload?;
    let input = EntryInput::parse(&request)?;
    let created = state
        .service
        .create_entry(&input)
        .await
        .or_api("Failed to create entry")?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> Result<Json<EntryWithType>, ApiError> {
    let Json(request) = payload?;
    let input = EntryInput::parse(&request)?;
    let updated = state
        .service
        .update_entry(&id, &input)
        .await
        .or_api("Failed to update entry")?;
    Ok(Json(updated))
}

/// Hard delete; the entry's vocabulary goes with it.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .service
        .delete_entry(&id)
        .await
        .or_api("Failed to delete entry")?;
    Ok(Json(SuccessResponse::ok()))
}

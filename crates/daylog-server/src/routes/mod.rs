//! Route table for `/api`.

pub mod entries;
pub mod health;
pub mod types;
pub mod vocabulary;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Routes relative to `/api`.
pub fn api() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health))
        .route("/types", get(types::list).post(types::create))
        .route("/entries", get(entries::list).post(entries::create))
        .route("/entries/grouped", get(entries::grouped))
        .route(
            "/entries/{id}",
            get(entries::get).put(entries::update).delete(entries::delete),
        )
        .route("/vocabulary", get(vocabulary::list).post(vocabulary::create))
}

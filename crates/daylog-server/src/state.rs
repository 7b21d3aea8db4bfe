//! Shared application state.

use std::sync::Arc;

use daylog_db::service::DaylogService;

/// Handed to every handler. The database service is the only shared state.
pub struct AppState {
    pub service: DaylogService,
}

impl AppState {
    #[must_use]
    pub fn new(service: DaylogService) -> Arc<Self> {
        Arc::new(Self { service })
    }
}

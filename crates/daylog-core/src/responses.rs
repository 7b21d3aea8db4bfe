//! Response envelopes returned as JSON by the HTTP API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grouping::EntryGroup;

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Acknowledgement with no payload (`DELETE /entries/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Response from `POST /vocabulary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VocabularyBatchResponse {
    pub success: bool,
    pub count: u64,
}

/// Response from `GET /entries/grouped`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroupedEntriesResponse {
    pub groups: Vec<EntryGroup>,
    pub total_entries: usize,
    pub unique_types: usize,
}

impl From<Vec<EntryGroup>> for GroupedEntriesResponse {
    fn from(groups: Vec<EntryGroup>) -> Self {
        Self {
            total_entries: groups.iter().map(|g| g.entries.len()).sum(),
            unique_types: groups.len(),
            groups,
        }
    }
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

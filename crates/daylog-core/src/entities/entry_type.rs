use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named category entries are classified under (e.g. "Meeting").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntryType {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

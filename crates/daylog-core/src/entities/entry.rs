use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{EntryType, Vocabulary};
use crate::enums::Difficulty;

/// A single dated log record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub type_id: String,
    pub notes: Option<String>,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}

/// An entry joined with its type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntryWithType {
    #[serde(flatten)]
    pub entry: Entry,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// An entry joined with its type and every vocabulary item it owns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntryDetail {
    #[serde(flatten)]
    pub entry: Entry,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub vocabulary: Vec<Vocabulary>,
}

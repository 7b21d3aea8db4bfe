use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::EntryWithType;

/// A word/meaning pair captured while writing an entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Vocabulary {
    pub id: String,
    pub word: String,
    pub meaning: String,
    pub entry_id: String,
    pub created_at: DateTime<Utc>,
}

/// A vocabulary item joined with its owning entry (and that entry's type).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VocabularyWithEntry {
    #[serde(flatten)]
    pub vocabulary: Vocabulary,
    pub entry: EntryWithType,
}

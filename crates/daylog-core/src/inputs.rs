//! Request bodies and their validated forms.
//!
//! Request structs mirror what the browser sends (camelCase, every field
//! optional so a missing field is a validation error rather than a decode
//! error). `parse`/`normalized` turn them into inputs the repos can write
//! without further checks.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;
use crate::errors::CoreError;
use crate::time::parse_entry_date;

pub const MSG_TYPE_NAME_REQUIRED: &str = "Type name is required";
pub const MSG_ENTRY_REQUIRED: &str = "Date and type are required";
pub const MSG_VOCABULARY_REQUIRED: &str = "Entry ID and vocabulary array are required";

/// Treat `None`, `""` and whitespace-only strings alike.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Entry types
// ---------------------------------------------------------------------------

/// Body of `POST /types`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EntryTypeRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Trim a type name, rejecting names that are empty afterwards.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the trimmed name is empty.
pub fn normalize_type_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(MSG_TYPE_NAME_REQUIRED.into()));
    }
    Ok(trimmed.to_string())
}

/// Case-folded form used for the type-name filter. Full Unicode lowercasing,
/// so `Übung` and `übung` fold alike.
#[must_use]
pub fn fold_type_name(name: &str) -> String {
    name.to_lowercase()
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Body of `POST /entries` and `PUT /entries/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Validated entry fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub date: DateTime<Utc>,
    pub type_id: String,
    pub notes: Option<String>,
    pub difficulty: Difficulty,
}

impl EntryInput {
    /// Build an input with default notes and difficulty.
    #[must_use]
    pub fn new(date: DateTime<Utc>, type_id: impl Into<String>) -> Self {
        Self {
            date,
            type_id: type_id.into(),
            notes: None,
            difficulty: Difficulty::default(),
        }
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub const fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Validate a raw request.
    ///
    /// `date` and `typeId` are required. Blank notes become `None`; a blank
    /// or missing difficulty becomes `Medium`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when a required field is missing, the
    /// date does not parse, or the difficulty is not a known value.
    pub fn parse(req: &EntryRequest) -> Result<Self, CoreError> {
        let (Some(date), Some(type_id)) = (
            non_blank(req.date.as_deref()),
            non_blank(req.type_id.as_deref()),
        ) else {
            return Err(CoreError::Validation(MSG_ENTRY_REQUIRED.into()));
        };

        let difficulty = match non_blank(req.difficulty.as_deref()) {
            Some(raw) => raw.parse()?,
            None => Difficulty::default(),
        };

        Ok(Self {
            date: parse_entry_date(date)?,
            type_id: type_id.trim().to_string(),
            notes: non_blank(req.notes.as_deref()).map(String::from),
            difficulty,
        })
    }
}

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// One word/meaning pair as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyItem {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meaning: String,
}

impl VocabularyItem {
    #[must_use]
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }

    /// Trimmed copy, or `None` if either side is blank.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let word = self.word.trim();
        let meaning = self.meaning.trim();
        if word.is_empty() || meaning.is_empty() {
            return None;
        }
        Some(Self::new(word, meaning))
    }
}

/// Drop incomplete pairs and trim the rest, preserving order.
#[must_use]
pub fn retain_complete(items: &[VocabularyItem]) -> Vec<VocabularyItem> {
    items.iter().filter_map(VocabularyItem::normalized).collect()
}

/// Body of `POST /vocabulary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyBatchRequest {
    #[serde(default)]
    pub entry_id: Option<String>,
    #[serde(default)]
    pub vocabulary: Option<Vec<VocabularyItem>>,
}

impl VocabularyBatchRequest {
    /// Split into the owning entry id and the submitted items.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when `entryId` is blank or
    /// `vocabulary` is missing.
    pub fn parts(&self) -> Result<(&str, &[VocabularyItem]), CoreError> {
        match (non_blank(self.entry_id.as_deref()), self.vocabulary.as_deref()) {
            (Some(entry_id), Some(items)) => Ok((entry_id.trim(), items)),
            _ => Err(CoreError::Validation(MSG_VOCABULARY_REQUIRED.into())),
        }
    }
}

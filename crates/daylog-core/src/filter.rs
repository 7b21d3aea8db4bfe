//! Entry list filters.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;
use crate::errors::CoreError;
use crate::inputs::non_blank;
use crate::time::parse_day;

/// Query string of `GET /entries` as the client sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EntryQuery {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Optional, AND-combined restrictions on the entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Entries dated within `[date, date + 1 day)`.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring of the entry type's name.
    pub type_name: Option<String>,
    /// Exact difficulty.
    pub difficulty: Option<Difficulty>,
}

impl EntryFilter {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.date.is_none() && self.type_name.is_none() && self.difficulty.is_none()
    }

    /// Parse a raw query. Empty parameters count as absent.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an unparseable date or an unknown
    /// difficulty.
    pub fn from_query(query: &EntryQuery) -> Result<Self, CoreError> {
        Ok(Self {
            date: non_blank(query.date.as_deref()).map(parse_day).transpose()?,
            type_name: non_blank(query.type_name.as_deref()).map(|s| s.trim().to_string()),
            difficulty: non_blank(query.difficulty.as_deref())
                .map(str::parse::<Difficulty>)
                .transpose()?,
        })
    }
}

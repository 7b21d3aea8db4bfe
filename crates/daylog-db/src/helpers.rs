//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Joined queries select several entities side by side, so each
//! parser takes the index of its first column.

use chrono::{DateTime, Utc};

use daylog_core::entities::{Entry, EntryType, EntryWithType, Vocabulary};

use crate::error::DatabaseError;

/// Column count of [`ENTRY_COLS`].
pub const ENTRY_WIDTH: i32 = 6;
/// Column count of [`VOCABULARY_COLS`].
pub const VOCABULARY_WIDTH: i32 = 5;

pub const ENTRY_TYPE_COLS: &str = "t.id, t.name, t.created_at";
pub const ENTRY_COLS: &str = "e.id, e.date, e.type_id, e.notes, e.difficulty, e.created_at";
pub const VOCABULARY_COLS: &str = "v.id, v.word, v.meaning, v.entry_id, v.created_at";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2024-01-01T00:00:00Z"`) and `SQLite`'s default
/// format (`"2024-01-01 00:00:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a `FromStr` enum such as `Difficulty`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any variant.
pub fn parse_enum<T>(s: &str) -> Result<T, DatabaseError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    s.parse()
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse an `EntryType` starting at column `base`.
pub(crate) fn row_to_entry_type(row: &libsql::Row, base: i32) -> Result<EntryType, DatabaseError> {
    Ok(EntryType {
        id: row.get(base)?,
        name: row.get(base + 1)?,
        created_at: parse_datetime(&row.get::<String>(base + 2)?)?,
    })
}

/// Parse an `Entry` starting at column `base`.
pub(crate) fn row_to_entry(row: &libsql::Row, base: i32) -> Result<Entry, DatabaseError> {
    Ok(Entry {
        id: row.get(base)?,
        date: parse_datetime(&row.get::<String>(base + 1)?)?,
        type_id: row.get(base + 2)?,
        notes: get_opt_string(row, base + 3)?,
        difficulty: parse_enum(&row.get::<String>(base + 4)?)?,
        created_at: parse_datetime(&row.get::<String>(base + 5)?)?,
    })
}

/// Parse an `Entry` followed by its `EntryType` starting at column `base`.
pub(crate) fn row_to_entry_with_type(
    row: &libsql::Row,
    base: i32,
) -> Result<EntryWithType, DatabaseError> {
    Ok(EntryWithType {
        entry: row_to_entry(row, base)?,
        entry_type: row_to_entry_type(row, base + ENTRY_WIDTH)?,
    })
}

/// Parse a `Vocabulary` starting at column `base`.
pub(crate) fn row_to_vocabulary(row: &libsql::Row, base: i32) -> Result<Vocabulary, DatabaseError> {
    Ok(Vocabulary {
        id: row.get(base)?,
        word: row.get(base + 1)?,
        meaning: row.get(base + 2)?,
        entry_id: row.get(base + 3)?,
        created_at: parse_datetime(&row.get::<String>(base + 4)?)?,
    })
}

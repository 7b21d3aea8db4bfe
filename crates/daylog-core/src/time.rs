//! Timestamp conventions.
//!
//! Every timestamp daylog persists is written by [`format_timestamp`]:
//! RFC 3339, UTC, second precision, `Z` suffix. With one fixed width the
//! SQL string order equals chronological order, which the day filter and
//! the `ORDER BY` clauses rely on.

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, TimeDelta, Utc};

use crate::errors::CoreError;

/// Current time truncated to whole seconds.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Render a timestamp in the canonical storage form (`2024-01-01T00:00:00Z`).
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Midnight UTC at the start of `day`.
#[must_use]
pub fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Half-open `[day, day + 1)` bounds for a calendar day.
#[must_use]
pub fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start_of_day(day);
    (start, start + TimeDelta::days(1))
}

/// Parse a calendar day in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the string is not a valid date.
pub fn parse_day(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::Validation(format!("Invalid date '{s}': {e}")))
}

/// Parse the `date` field of an entry request.
///
/// A bare day (`2024-01-01`) becomes midnight UTC. A full RFC 3339 timestamp
/// is kept, converted to UTC and truncated to seconds.
///
/// # Errors
///
/// Returns `CoreError::Validation` if neither form parses.
pub fn parse_entry_date(s: &str) -> Result<DateTime<Utc>, CoreError> {
    let s = s.trim();
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(start_of_day(day));
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(0))
        .map_err(|_| CoreError::Validation(format!("Invalid date '{s}'")))
}

//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing of the TEXT encodings the schema
//! uses for timestamps, calendar dates, wall-clock times and enums.

use chrono::{DateTime, NaiveDate, Utc};
use roll_core::calendar::{self, DayOfWeek, WallTime};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
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

/// Parse a stored `YYYY-MM-DD` column.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a malformed stored date.
pub fn parse_stored_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    calendar::parse_date(s)
        .map_err(|e| DatabaseError::InvalidState(format!("stored date '{s}': {e}")))
}

/// Parse a stored `HH:MM` column.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a malformed stored time.
pub fn parse_stored_time(s: &str) -> Result<WallTime, DatabaseError> {
    calendar::parse_time(s)
        .map_err(|e| DatabaseError::InvalidState(format!("stored time '{s}': {e}")))
}

/// Parse a stored `day_of_week` INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the value is outside `0..=6`.
pub fn parse_stored_day(value: i64) -> Result<DayOfWeek, DatabaseError> {
    DayOfWeek::new(value)
        .map_err(|e| DatabaseError::InvalidState(format!("stored day_of_week: {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all roll-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse a nullable enum column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string matches no variant.
pub fn parse_optional_enum<T: serde::de::DeserializeOwned>(
    s: Option<&str>,
) -> Result<Option<T>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_enum(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
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

/// Read a `COUNT(..)`/`SUM(..)` column as `u32`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a negative or oversized count.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u32::try_from(raw).map_err(|_| DatabaseError::InvalidState(format!("count out of range: {raw}")))
}

/// True when a libSQL error is a `UNIQUE` constraint rejection.
#[must_use]
pub fn is_unique_violation(err: &libsql::Error) -> bool {
    err.to_string().contains("UNIQUE constraint failed")
}

/// True when an insert was rejected because its generated `{table}.id`
/// already exists, as opposed to any other unique key on the table.
#[must_use]
pub fn is_id_collision(err: &libsql::Error, table: &str) -> bool {
    err.to_string()
        .contains(&format!("UNIQUE constraint failed: {table}.id"))
}

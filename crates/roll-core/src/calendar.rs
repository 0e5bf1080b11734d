//! Day resolver and wall-clock types.
//!
//! Dates cross the boundary as `YYYY-MM-DD` and are handled as naive calendar
//! dates throughout: nothing here consults the process timezone, so a given date
//! string always resolves to the same weekday. Times are `HH:MM` 24-hour wall
//! clock values with no timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// ---------------------------------------------------------------------------
// DayOfWeek
// ---------------------------------------------------------------------------

/// Day-of-week index, `0 = Sunday` through `6 = Saturday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// Validate a raw index.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `index` is outside `0..=6`.
    pub fn new(index: i64) -> Result<Self, CoreError> {
        u8::try_from(index)
            .ok()
            .filter(|i| *i <= 6)
            .map(Self)
            .ok_or_else(|| CoreError::Validation(format!("day_of_week must be 0-6, got {index}")))
    }

    /// Resolve the weekday of a naive calendar date (proleptic Gregorian).
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        // num_days_from_sunday() is always 0..=6
        #[allow(clippy::cast_possible_truncation)]
        Self(date.weekday().num_days_from_sunday() as u8)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        DAY_NAMES[self.0 as usize]
    }
}

impl TryFrom<i64> for DayOfWeek {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl From<DayOfWeek> for i64 {
    fn from(day: DayOfWeek) -> Self {
        Self::from(day.0)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// WallTime
// ---------------------------------------------------------------------------

/// A minute-precision wall-clock time, rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallTime(NaiveTime);

impl WallTime {
    /// Build from hour and minute.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the pair is not a valid 24-hour time.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, CoreError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| CoreError::Validation(format!("invalid time {hour:02}:{minute:02}")))
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }
}

impl FromStr for WallTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl Serialize for WallTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date string as a naive calendar date.
///
/// # Errors
///
/// Returns `CoreError::Validation` for anything other than a real calendar date
/// in exactly that shape.
pub fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    let t = s.trim();
    if t.len() != 10 {
        return Err(CoreError::Validation(format!(
            "date must be YYYY-MM-DD, got '{s}'"
        )));
    }
    NaiveDate::parse_from_str(t, DATE_FORMAT)
        .map_err(|e| CoreError::Validation(format!("invalid date '{s}': {e}")))
}

/// Parse an `HH:MM` 24-hour time string.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the string is not a valid `HH:MM` time.
pub fn parse_time(s: &str) -> Result<WallTime, CoreError> {
    let t = s.trim();
    let Some((h, m)) = t.split_once(':') else {
        return Err(CoreError::Validation(format!("time must be HH:MM, got '{s}'")));
    };
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(CoreError::Validation(format!("time must be HH:MM, got '{s}'")));
    }
    let hour = h
        .parse::<u32>()
        .map_err(|_| CoreError::Validation(format!("time hour must be numeric, got '{s}'")))?;
    let minute = m
        .parse::<u32>()
        .map_err(|_| CoreError::Validation(format!("time minute must be numeric, got '{s}'")))?;
    WallTime::from_hm(hour, minute)
}

/// Render a date in the boundary format.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Day resolver: map a `YYYY-MM-DD` string to its weekday index.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the date string is malformed.
pub fn resolve_day_of_week(date: &str) -> Result<DayOfWeek, CoreError> {
    parse_date(date).map(DayOfWeek::of)
}

/// Calendar-month key (`YYYY-MM`) used to group ledger records.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

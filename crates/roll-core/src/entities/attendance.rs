use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::non_blank;
use super::timetable::TimetableEntry;
use crate::calendar::{DayOfWeek, WallTime};
use crate::enums::ReasonCategory;
use crate::errors::CoreError;

/// Did the user attend a specific class on a specific calendar date.
///
/// At most one record exists per `(user_id, class_id, date)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub class_id: String,
    pub date: NaiveDate,
    pub attended: bool,
    pub reason_category: Option<ReasonCategory>,
    pub reason_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// The attended/reason triple carried by this record.
    #[must_use]
    pub fn decision(&self) -> AttendanceDecision {
        AttendanceDecision {
            attended: self.attended,
            reason_category: self.reason_category,
            reason_text: self.reason_text.clone(),
        }
    }
}

/// The value written by mark, update, and bulk reconciliation.
///
/// Reasons only describe absences: `normalized()` drops them when
/// `attended` is true, and collapses blank reason text to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttendanceDecision {
    pub attended: bool,
    #[serde(default)]
    pub reason_category: Option<ReasonCategory>,
    #[serde(default)]
    pub reason_text: Option<String>,
}

impl AttendanceDecision {
    #[must_use]
    pub const fn present() -> Self {
        Self {
            attended: true,
            reason_category: None,
            reason_text: None,
        }
    }

    #[must_use]
    pub fn absent(reason_category: Option<ReasonCategory>, reason_text: Option<&str>) -> Self {
        Self {
            attended: false,
            reason_category,
            reason_text: reason_text.map(String::from),
        }
    }

    /// Build from boundary strings.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `reason_category` is given but is not
    /// one of the closed set, even when `attended` is true.
    pub fn parse(
        attended: bool,
        reason_category: Option<&str>,
        reason_text: Option<&str>,
    ) -> Result<Self, CoreError> {
        let reason_category = match non_blank(reason_category) {
            Some(raw) => Some(raw.parse::<ReasonCategory>()?),
            None => None,
        };
        Ok(Self {
            attended,
            reason_category,
            reason_text: reason_text.map(String::from),
        }
        .normalized())
    }

    /// Canonical stored form.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.attended {
            return Self::present();
        }
        Self {
            attended: false,
            reason_category: self.reason_category,
            reason_text: non_blank(self.reason_text.as_deref()),
        }
    }
}

/// A ledger record joined with its class, for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttendanceView {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub subject: String,
    pub teacher: String,
    #[schemars(with = "u8")]
    pub day_of_week: DayOfWeek,
    #[schemars(with = "String")]
    pub start_time: WallTime,
    #[schemars(with = "String")]
    pub end_time: WallTime,
}

/// One timetabled class on a given date, with its record if one was marked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyOccurrence {
    pub class: TimetableEntry,
    pub attendance: Option<AttendanceRecord>,
}

/// Every occurrence on one date, ordered by start time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailySchedule {
    pub date: NaiveDate,
    #[schemars(with = "u8")]
    pub day_of_week: DayOfWeek,
    pub occurrences: Vec<DailyOccurrence>,
}

impl DailySchedule {
    /// Occurrences with no record yet.
    #[must_use]
    pub fn unmarked(&self) -> usize {
        self.occurrences
            .iter()
            .filter(|o| o.attendance.is_none())
            .count()
    }
}

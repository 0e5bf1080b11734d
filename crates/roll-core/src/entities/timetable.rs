use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::non_blank;
use crate::calendar::{DayOfWeek, WallTime, parse_time};
use crate::errors::CoreError;

/// A recurring weekly class slot.
///
/// Overlapping slots on the same day are allowed; the timetable does not
/// detect schedule conflicts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimetableEntry {
    pub id: String,
    pub user_id: String,
    #[schemars(with = "u8")]
    pub day_of_week: DayOfWeek,
    #[schemars(with = "String")]
    pub start_time: WallTime,
    #[schemars(with = "String")]
    pub end_time: WallTime,
    pub subject: String,
    pub teacher: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimetableEntry {
    /// Check the invariants every stored entry must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank subject or teacher, or a
    /// start time that is not strictly before the end time.
    pub fn check_invariants(&self) -> Result<(), CoreError> {
        if self.subject.trim().is_empty() {
            return Err(CoreError::validation("subject must not be blank"));
        }
        if self.teacher.trim().is_empty() {
            return Err(CoreError::validation("teacher must not be blank"));
        }
        check_time_order(self.start_time, self.end_time)
    }
}

/// Class creation input, shaped like the boundary payload: every field may be
/// absent and times are still `HH:MM` strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewClass {
    #[serde(default)]
    pub day_of_week: Option<i64>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A `NewClass` that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedClass {
    pub day_of_week: DayOfWeek,
    pub start_time: WallTime,
    pub end_time: WallTime,
    pub subject: String,
    pub teacher: String,
    pub location: Option<String>,
}

impl NewClass {
    /// All required fields present.
    #[must_use]
    pub fn new(
        day_of_week: i64,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        subject: impl Into<String>,
        teacher: impl Into<String>,
    ) -> Self {
        Self {
            day_of_week: Some(day_of_week),
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            subject: Some(subject.into()),
            teacher: Some(teacher.into()),
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Check presence of every required field, then parse and order-check.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming every missing field, or the first
    /// malformed one.
    pub fn validate(&self) -> Result<ValidatedClass, CoreError> {
        let subject = non_blank(self.subject.as_deref());
        let teacher = non_blank(self.teacher.as_deref());
        let start = non_blank(self.start_time.as_deref());
        let end = non_blank(self.end_time.as_deref());

        let missing: Vec<&str> = [
            ("day_of_week", self.day_of_week.is_some()),
            ("start_time", start.is_some()),
            ("end_time", end.is_some()),
            ("subject", subject.is_some()),
            ("teacher", teacher.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| (!present).then_some(name))
        .collect();
        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        let (Some(day), Some(start), Some(end), Some(subject), Some(teacher)) =
            (self.day_of_week, start, end, subject, teacher)
        else {
            return Err(CoreError::validation("missing required fields"));
        };

        let start_time = parse_time(&start)?;
        let end_time = parse_time(&end)?;
        check_time_order(start_time, end_time)?;

        Ok(ValidatedClass {
            day_of_week: DayOfWeek::new(day)?,
            start_time,
            end_time,
            subject,
            teacher,
            location: non_blank(self.location.as_deref()),
        })
    }
}

fn check_time_order(start: WallTime, end: WallTime) -> Result<(), CoreError> {
    if start < end {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "start time {start} must be before end time {end}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_accepts_complete_input() {
        let valid = NewClass::new(1, "08:00", "09:00", "Physics", "Dr. Rao")
            .with_location("  Room 4 ")
            .validate()
            .unwrap();
        assert_eq!(valid.day_of_week, DayOfWeek::MONDAY);
        assert_eq!(valid.start_time.to_string(), "08:00");
        assert_eq!(valid.location.as_deref(), Some("Room 4"));
    }

    #[test]
    fn validate_names_all_missing_fields() {
        let err = NewClass {
            subject: Some("Physics".into()),
            ..NewClass::default()
        }
        .validate()
        .unwrap_err();
        let msg = err.to_string();
        for field in ["day_of_week", "start_time", "end_time", "teacher"] {
            assert!(msg.contains(field), "{field} not reported in: {msg}");
        }
        assert!(!msg.contains("subject"));
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let err = NewClass::new(1, "08:00", "09:00", "  ", "Dr. Rao")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("subject"));
    }

    #[test]
    fn validate_rejects_inverted_times() {
        let err = NewClass::new(1, "10:00", "09:00", "Physics", "Dr. Rao")
            .validate()
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(NewClass::new(1, "09:00", "09:00", "Physics", "Dr. Rao")
            .validate()
            .is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_day() {
        assert!(NewClass::new(7, "08:00", "09:00", "Physics", "Dr. Rao")
            .validate()
            .is_err());
    }

    #[test]
    fn blank_location_is_dropped() {
        let valid = NewClass::new(2, "08:00", "09:00", "Physics", "Dr. Rao")
            .with_location("   ")
            .validate()
            .unwrap();
        assert_eq!(valid.location, None);
    }
}

//! Class update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use roll_core::calendar::{DayOfWeek, parse_time};
use roll_core::entities::{TimetableEntry, non_blank};
use roll_core::errors::CoreError;

/// Partial timetable patch. `None` keeps the stored value.
///
/// `location` is tri-state: `None` keeps it, `Some(None)` clears it,
/// `Some(Some(..))` replaces it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
}

impl ClassUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.day_of_week.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.subject.is_none()
            && self.teacher.is_none()
            && self.location.is_none()
    }

    /// Merge this patch over `current`.
    ///
    /// Blank subject or teacher strings count as not given. The merged entry
    /// must still satisfy every timetable invariant, so moving only the start
    /// past the stored end is rejected.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a malformed field or a merged entry
    /// whose start is not before its end.
    pub fn apply(
        &self,
        current: &TimetableEntry,
        updated_at: DateTime<Utc>,
    ) -> Result<TimetableEntry, CoreError> {
        let mut merged = current.clone();

        if let Some(day) = self.day_of_week {
            merged.day_of_week = DayOfWeek::new(day)?;
        }
        if let Some(start) = non_blank(self.start_time.as_deref()) {
            merged.start_time = parse_time(&start)?;
        }
        if let Some(end) = non_blank(self.end_time.as_deref()) {
            merged.end_time = parse_time(&end)?;
        }
        if let Some(subject) = non_blank(self.subject.as_deref()) {
            merged.subject = subject;
        }
        if let Some(teacher) = non_blank(self.teacher.as_deref()) {
            merged.teacher = teacher;
        }
        if let Some(ref location) = self.location {
            merged.location = non_blank(location.as_deref());
        }

        merged.check_invariants()?;
        merged.updated_at = updated_at;
        Ok(merged)
    }
}

pub struct ClassUpdateBuilder(ClassUpdate);

impl ClassUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ClassUpdate::default())
    }

    #[must_use]
    pub const fn day_of_week(mut self, day: i64) -> Self {
        self.0.day_of_week = Some(day);
        self
    }

    #[must_use]
    pub fn start_time(mut self, start: impl Into<String>) -> Self {
        self.0.start_time = Some(start.into());
        self
    }

    #[must_use]
    pub fn end_time(mut self, end: impl Into<String>) -> Self {
        self.0.end_time = Some(end.into());
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.0.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn teacher(mut self, teacher: impl Into<String>) -> Self {
        self.0.teacher = Some(teacher.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.0.location = Some(location);
        self
    }

    #[must_use]
    pub fn build(self) -> ClassUpdate {
        self.0
    }
}

impl Default for ClassUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

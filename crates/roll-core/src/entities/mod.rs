//! Entity structs for all rollcall domain objects.
//!
//! Each persisted entity maps to a table in the libSQL database (`users`,
//! `classes`, `attendance`). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod attendance;
mod timetable;
mod user;

pub use attendance::{
    AttendanceDecision, AttendanceRecord, AttendanceView, DailyOccurrence, DailySchedule,
};
pub use timetable::{NewClass, TimetableEntry, ValidatedClass};
pub use user::{NewUser, User, normalize_email};

/// Trim optional free text; blank collapses to `None`.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

//! Attendance statistics and target-rate projections.
//!
//! Everything here is a pure function of counts: the database layer supplies
//! `(present, total)` per class and these helpers derive rates, standings, and
//! month groupings without touching storage.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calendar::month_key;
use crate::entities::AttendanceView;
use crate::enums::Standing;
use crate::errors::CoreError;

/// Attendance rate a class must stay at or above.
pub const DEFAULT_TARGET_RATE: f64 = 0.75;

/// Absorbs binary rounding in `total * target` (e.g. `10 * 0.7`) before `ceil`.
const CEIL_EPSILON: f64 = 1e-9;

/// `present / total`, or `None` when nothing has been marked.
#[must_use]
pub fn attendance_rate(present: u32, total: u32) -> Option<f64> {
    (total > 0).then(|| f64::from(present) / f64::from(total))
}

/// Check that a target rate lies in `(0, 1]`.
///
/// # Errors
///
/// Returns `CoreError::Validation` for zero, negative, NaN, or above-one rates.
pub fn validate_target_rate(target_rate: f64) -> Result<f64, CoreError> {
    if target_rate > 0.0 && target_rate <= 1.0 {
        Ok(target_rate)
    } else {
        Err(CoreError::Validation(format!(
            "target rate must be in (0, 1], got {target_rate}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Per-class stats
// ---------------------------------------------------------------------------

/// Per-class aggregate, recomputed from the ledger on every request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassStat {
    pub class_id: String,
    pub subject: String,
    pub total: u32,
    pub present: u32,
    pub attendance_rate: Option<f64>,
}

impl ClassStat {
    #[must_use]
    pub fn from_counts(
        class_id: impl Into<String>,
        subject: impl Into<String>,
        total: u32,
        present: u32,
    ) -> Self {
        let present = present.min(total);
        Self {
            class_id: class_id.into(),
            subject: subject.into(),
            total,
            present,
            attendance_rate: attendance_rate(present, total),
        }
    }

    #[must_use]
    pub const fn absent(&self) -> u32 {
        self.total - self.present
    }

    /// Project this class against `target_rate`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an out-of-range target.
    pub fn projection(&self, target_rate: f64) -> Result<Option<Projection>, CoreError> {
        project_requirement(self.present, self.total, target_rate)
    }
}

/// A class stat paired with its projection (absent when `total = 0`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassStanding {
    #[serde(flatten)]
    pub stat: ClassStat,
    pub projection: Option<Projection>,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// How far a class is from the target rate, and what it takes to recover.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Projection {
    pub target_rate: f64,
    pub current_rate: f64,
    /// `ceil(total * target_rate)`.
    pub min_required_present: u32,
    /// `total - min_required_present`.
    pub can_skip: u32,
    pub already_absent: u32,
    /// `can_skip - already_absent`; negative once over budget.
    pub remaining_skips: i64,
    /// `max(0, min_required_present - present)`.
    pub needs_to_attend: u32,
    pub standing: Standing,
}

/// Project `(present, total)` against `target_rate`.
///
/// Returns `Ok(None)` when `total = 0`: there is no rate to project.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the target is outside `(0, 1]` or
/// `present > total`.
pub fn project_requirement(
    present: u32,
    total: u32,
    target_rate: f64,
) -> Result<Option<Projection>, CoreError> {
    let target_rate = validate_target_rate(target_rate)?;
    if present > total {
        return Err(CoreError::Validation(format!(
            "present ({present}) cannot exceed total ({total})"
        )));
    }
    let Some(current_rate) = attendance_rate(present, total) else {
        return Ok(None);
    };

    let min_required_present = min_required(total, target_rate);
    let can_skip = total - min_required_present;
    let already_absent = total - present;
    let remaining_skips = i64::from(can_skip) - i64::from(already_absent);
    let needs_to_attend = min_required_present.saturating_sub(present);

    let standing = if current_rate >= target_rate {
        Standing::Safe
    } else if remaining_skips >= 0 {
        Standing::Warning
    } else {
        Standing::Critical
    };

    Ok(Some(Projection {
        target_rate,
        current_rate,
        min_required_present,
        can_skip,
        already_absent,
        remaining_skips,
        needs_to_attend,
        standing,
    }))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn min_required(total: u32, target_rate: f64) -> u32 {
    let raw = (f64::from(total) * target_rate - CEIL_EPSILON).ceil().max(0.0);
    (raw as u32).min(total)
}

// ---------------------------------------------------------------------------
// Roll-ups
// ---------------------------------------------------------------------------

/// All classes of a user folded into one rate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OverallStats {
    pub classes: u32,
    pub total: u32,
    pub present: u32,
    pub attendance_rate: Option<f64>,
}

impl OverallStats {
    #[must_use]
    pub fn from_stats(stats: &[ClassStat]) -> Self {
        let total = stats.iter().map(|s| s.total).sum();
        let present = stats.iter().map(|s| s.present).sum();
        Self {
            classes: u32::try_from(stats.len()).unwrap_or(u32::MAX),
            total,
            present,
            attendance_rate: attendance_rate(present, total),
        }
    }
}

/// Per-subject tally inside one month.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubjectTally {
    pub subject: String,
    pub teacher: String,
    pub total: u32,
    pub present: u32,
    pub attendance_rate: Option<f64>,
}

/// One calendar month of ledger records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MonthSummary {
    /// `YYYY-MM`.
    pub month: String,
    pub total: u32,
    pub present: u32,
    pub attendance_rate: Option<f64>,
    pub subjects: Vec<SubjectTally>,
}

/// Group joined ledger rows by month (newest first), then by subject (A-Z).
///
/// The teacher reported for a subject is the one on the first row seen for it.
#[must_use]
pub fn summarize_by_month(views: &[AttendanceView]) -> Vec<MonthSummary> {
    let mut months: BTreeMap<String, BTreeMap<&str, (&str, u32, u32)>> = BTreeMap::new();
    for view in views {
        let entry = months
            .entry(month_key(view.record.date))
            .or_default()
            .entry(view.subject.as_str())
            .or_insert((view.teacher.as_str(), 0, 0));
        entry.1 += 1;
        if view.record.attended {
            entry.2 += 1;
        }
    }

    months
        .into_iter()
        .rev()
        .map(|(month, subjects)| {
            let subjects: Vec<SubjectTally> = subjects
                .into_iter()
                .map(|(subject, (teacher, total, present))| SubjectTally {
                    subject: subject.to_string(),
                    teacher: teacher.to_string(),
                    total,
                    present,
                    attendance_rate: attendance_rate(present, total),
                })
                .collect();
            let total = subjects.iter().map(|s| s.total).sum();
            let present = subjects.iter().map(|s| s.present).sum();
            MonthSummary {
                month,
                total,
                present,
                attendance_rate: attendance_rate(present, total),
                subjects,
            }
        })
        .collect()
}

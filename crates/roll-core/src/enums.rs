//! Closed enums for rollcall.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ReasonCategory
// ---------------------------------------------------------------------------

/// Why a class was missed. Only meaningful on absences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCategory {
    Health,
    Program,
    Travel,
    PublicHoliday,
    NoClass,
    Strike,
    Other,
}

impl ReasonCategory {
    pub const ALL: [Self; 7] = [
        Self::Health,
        Self::Program,
        Self::Travel,
        Self::PublicHoliday,
        Self::NoClass,
        Self::Strike,
        Self::Other,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Program => "program",
            Self::Travel => "travel",
            Self::PublicHoliday => "public_holiday",
            Self::NoClass => "no_class",
            Self::Strike => "strike",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ReasonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasonCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown reason category '{s}' (expected one of: {})",
                    Self::ALL.map(Self::as_str).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Standing
// ---------------------------------------------------------------------------

/// Where a class stands relative to the target attendance rate.
///
/// ```text
/// safe     current rate >= target
/// warning  below target, but the remaining-skip budget is not exhausted
/// critical below target and over budget
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Safe,
    Warning,
    Critical,
}

impl Standing {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! CLI response types returned as JSON by `roll` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stats::{ClassStanding, OverallStats};

/// Response from `roll class delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
    /// Attendance records removed along with the class.
    pub cascaded_records: u64,
}

/// Response from `roll attendance bulk`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BulkUpdateResponse {
    pub subject: String,
    pub updated: u64,
}

/// Response from `roll stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatsReport {
    pub target_rate: f64,
    pub classes: Vec<ClassStanding>,
    pub overall: OverallStats,
}

//! Attendance policy.

use roll_core::stats::DEFAULT_TARGET_RATE;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_target_rate() -> f64 {
    DEFAULT_TARGET_RATE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttendanceConfig {
    /// Minimum attendance rate per class, in `(0, 1]`.
    #[serde(default = "default_target_rate")]
    pub target_rate: f64,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            target_rate: default_target_rate(),
        }
    }
}

impl AttendanceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        roll_core::stats::validate_target_rate(self.target_rate)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidValue {
                field: "attendance.target_rate".into(),
                reason: e.to_string(),
            })
    }
}

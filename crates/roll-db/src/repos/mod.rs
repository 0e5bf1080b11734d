//! Repository modules implementing the storage operations.
//!
//! Each module adds methods to `RollService` via `impl RollService` blocks.

pub mod attendance;
pub mod stats;
pub mod timetable;
pub mod user;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AttendanceCommands, ClassCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Register and look up users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Weekly timetable.
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },
    /// Classes scheduled on a date, with their attendance for that date.
    Daily(DailyArgs),
    /// Mark attendance for one class occurrence.
    Mark(MarkArgs),
    /// Attendance ledger.
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },
    /// Per-class stats with target-rate projection.
    Stats(StatsArgs),
    /// Attendance grouped by month and subject.
    Monthly,
    /// Overall attendance across every class.
    Overall,
}

/// Arguments for `roll daily`.
#[derive(Clone, Debug, Args)]
pub struct DailyArgs {
    /// Calendar date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `roll mark`.
#[derive(Clone, Debug, Args)]
pub struct MarkArgs {
    /// Class ID.
    #[arg(long = "class")]
    pub class_id: String,
    /// Calendar date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    #[command(flatten)]
    pub decision: DecisionArgs,
}

/// Arguments for `roll stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Target attendance rate in (0, 1]. Defaults to `attendance.target_rate`.
    #[arg(long)]
    pub target: Option<f64>,
}

/// Attended or absent, with an optional reason for absences.
#[derive(Clone, Debug, Args)]
pub struct DecisionArgs {
    #[command(flatten)]
    pub presence: Presence,
    /// Absence reason: health, program, travel, public_holiday, no_class, strike, other.
    #[arg(long, requires = "absent")]
    pub reason: Option<String>,
    /// Free-text absence detail.
    #[arg(long, requires = "absent")]
    pub note: Option<String>,
}

impl DecisionArgs {
    #[must_use]
    pub const fn attended(&self) -> bool {
        self.presence.present
    }
}

#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct Presence {
    /// Attended.
    #[arg(long)]
    pub present: bool,
    /// Did not attend.
    #[arg(long)]
    pub absent: bool,
}

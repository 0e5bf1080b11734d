use clap::Subcommand;

use crate::cli::root_commands::DecisionArgs;

/// Attendance ledger commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AttendanceCommands {
    /// List records, newest date first. Bounded by the global --limit.
    List {
        /// Inclusive start date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<String>,
        /// Inclusive end date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<String>,
    },
    /// Get a record by ID.
    Get { id: String },
    /// Overwrite one record by ID.
    Update {
        id: String,
        #[command(flatten)]
        decision: DecisionArgs,
    },
    /// Overwrite every record of one subject, across all dates.
    Bulk {
        /// Exact subject name.
        #[arg(long)]
        subject: String,
        #[command(flatten)]
        decision: DecisionArgs,
    },
}

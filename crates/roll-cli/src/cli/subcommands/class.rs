use clap::{Args, Subcommand};

/// Timetable commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClassCommands {
    /// Create a class slot.
    Create(ClassCreateArgs),
    /// List classes by day then start time.
    List,
    /// Get a class by ID.
    Get { id: String },
    /// Update a class. Omitted fields keep their value.
    Update(ClassUpdateArgs),
    /// Delete a class and its attendance history.
    Delete { id: String },
}

/// Arguments for `roll class create`.
#[derive(Clone, Debug, Args)]
pub struct ClassCreateArgs {
    /// Day of week, 0 = Sunday through 6 = Saturday.
    #[arg(long)]
    pub day: i64,
    /// Start time (HH:MM).
    #[arg(long)]
    pub start: String,
    /// End time (HH:MM).
    #[arg(long)]
    pub end: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub teacher: String,
    #[arg(long)]
    pub location: Option<String>,
}

/// Arguments for `roll class update`.
#[derive(Clone, Debug, Args)]
pub struct ClassUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub day: Option<i64>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub teacher: Option<String>,
    #[arg(long, conflicts_with = "clear_location")]
    pub location: Option<String>,
    /// Remove the stored location.
    #[arg(long)]
    pub clear_location: bool,
}

use clap::{Args, Subcommand};

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a user.
    Register(RegisterArgs),
    /// Find a user by email (case-insensitive).
    Find {
        #[arg(long)]
        email: String,
    },
}

/// Arguments for `roll user register`.
#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    /// Credential hash produced by the authentication layer.
    #[arg(long)]
    pub credential_hash: String,
    #[arg(long)]
    pub fullname: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub semester: Option<String>,
    #[arg(long)]
    pub batch: Option<String>,
    #[arg(long)]
    pub roll_number: Option<String>,
}

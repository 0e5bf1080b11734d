mod find;
mod register;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `roll user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Register(args) => register::run(args, ctx, flags).await,
        UserCommands::Find { email } => find::run(email, ctx, flags).await,
    }
}

mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassCommands;
use crate::commands::shared::user::require_user_id;
use crate::context::AppContext;

/// Handle `roll class`.
pub async fn handle(action: &ClassCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = require_user_id(ctx, flags).await?;
    match action {
        ClassCommands::Create(args) => create::run(&user_id, args, ctx, flags).await,
        ClassCommands::List => list::run(&user_id, ctx, flags).await,
        ClassCommands::Get { id } => get::run(&user_id, id, ctx, flags).await,
        ClassCommands::Update(args) => update::run(&user_id, args, ctx, flags).await,
        ClassCommands::Delete { id } => delete::run(&user_id, id, ctx, flags).await,
    }
}

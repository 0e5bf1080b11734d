mod bulk;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AttendanceCommands;
use crate::commands::shared::user::require_user_id;
use crate::context::AppContext;

/// Handle `roll attendance`.
pub async fn handle(
    action: &AttendanceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user_id = require_user_id(ctx, flags).await?;
    match action {
        AttendanceCommands::List { from, to } => {
            list::run(&user_id, from.as_deref(), to.as_deref(), ctx, flags).await
        }
        AttendanceCommands::Get { id } => get::run(&user_id, id, ctx, flags).await,
        AttendanceCommands::Update { id, decision } => {
            update::run(&user_id, id, decision, ctx, flags).await
        }
        AttendanceCommands::Bulk { subject, decision } => {
            bulk::run(&user_id, subject, decision, ctx, flags).await
        }
    }
}

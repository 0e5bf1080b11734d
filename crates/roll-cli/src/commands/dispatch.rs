use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Class { action } => commands::class::handle(&action, ctx, flags).await,
        Commands::Daily(args) => commands::daily::handle(&args, ctx, flags).await,
        Commands::Mark(args) => commands::mark::handle(&args, ctx, flags).await,
        Commands::Attendance { action } => commands::attendance::handle(&action, ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags).await,
        Commands::Monthly => commands::monthly::handle(ctx, flags).await,
        Commands::Overall => commands::overall::handle(ctx, flags).await,
    }
}

use roll_core::stats::validate_target_rate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::shared::user::require_user_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `roll stats`.
pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let target = validate_target_rate(args.target.unwrap_or(ctx.config.attendance.target_rate))?;
    let user_id = require_user_id(ctx, flags).await?;
    let report = ctx
        .service
        .compute_stats_with_projection(&user_id, target)
        .await?;
    output(&report, flags.format)
}

use crate::cli::GlobalFlags;
use crate::commands::shared::user::require_user_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `roll overall`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = require_user_id(ctx, flags).await?;
    let overall = ctx.service.overall_stats(&user_id).await?;
    output(&overall, flags.format)
}

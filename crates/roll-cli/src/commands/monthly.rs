use crate::cli::GlobalFlags;
use crate::commands::shared::user::require_user_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `roll monthly`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = require_user_id(ctx, flags).await?;
    let months = ctx.service.monthly_summary(&user_id).await?;
    output(&months, flags.format)
}

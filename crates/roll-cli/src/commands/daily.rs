use crate::cli::GlobalFlags;
use crate::cli::root_commands::DailyArgs;
use crate::commands::shared::date::{parse_optional_date, today};
use crate::commands::shared::user::require_user_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `roll daily`.
pub async fn handle(args: &DailyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = require_user_id(ctx, flags).await?;
    let date = parse_optional_date(args.date.as_deref(), "date")?.unwrap_or_else(today);
    let schedule = ctx.service.daily_occurrences(&user_id, date).await?;
    tracing::debug!(%date, unmarked = schedule.unmarked(), "daily schedule loaded");
    output(&schedule, flags.format)
}

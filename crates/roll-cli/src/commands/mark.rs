use crate::cli::GlobalFlags;
use crate::cli::root_commands::MarkArgs;
use crate::commands::shared::date::parse_date_arg;
use crate::commands::shared::decision::decision_from_args;
use crate::commands::shared::user::require_user_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `roll mark`. Re-marking the same class and date overwrites.
pub async fn handle(args: &MarkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = require_user_id(ctx, flags).await?;
    let date = parse_date_arg(&args.date, "date")?;
    let decision = decision_from_args(&args.decision)?;
    let record = ctx
        .service
        .mark_attendance(&user_id, &args.class_id, date, &decision)
        .await?;
    output(&record, flags.format)
}

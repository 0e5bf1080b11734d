use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecisionArgs;
use crate::commands::shared::decision::decision_from_args;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    user_id: &str,
    id: &str,
    args: &DecisionArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let decision = decision_from_args(args)?;
    let record = ctx.service.update_attendance(user_id, id, &decision).await?;
    output(&record, flags.format)
}

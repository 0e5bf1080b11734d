use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecisionArgs;
use crate::commands::shared::decision::decision_from_args;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    user_id: &str,
    subject: &str,
    args: &DecisionArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let decision = decision_from_args(args)?;
    let response = ctx
        .service
        .bulk_update_by_subject(user_id, subject, &decision)
        .await?;
    if response.updated == 0 && !flags.quiet {
        eprintln!("no attendance records found for subject '{subject}'");
    }
    output(&response, flags.format)
}

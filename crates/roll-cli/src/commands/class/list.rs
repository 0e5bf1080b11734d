use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(user_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let classes = ctx.service.list_classes(user_id).await?;
    output(&classes, flags.format)
}

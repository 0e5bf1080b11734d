use roll_core::entities::NewClass;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassCreateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    user_id: &str,
    args: &ClassCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut new = NewClass::new(args.day, &args.start, &args.end, &args.subject, &args.teacher);
    if let Some(location) = &args.location {
        new = new.with_location(location);
    }
    let class = ctx.service.create_class(user_id, &new).await?;
    output(&class, flags.format)
}

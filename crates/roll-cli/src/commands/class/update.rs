use roll_db::updates::class::ClassUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    user_id: &str,
    args: &ClassUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ClassUpdateBuilder::new();
    if let Some(day) = args.day {
        builder = builder.day_of_week(day);
    }
    if let Some(start) = &args.start {
        builder = builder.start_time(start);
    }
    if let Some(end) = &args.end {
        builder = builder.end_time(end);
    }
    if let Some(subject) = &args.subject {
        builder = builder.subject(subject);
    }
    if let Some(teacher) = &args.teacher {
        builder = builder.teacher(teacher);
    }
    if args.clear_location {
        builder = builder.location(None);
    } else if let Some(location) = &args.location {
        builder = builder.location(Some(location.clone()));
    }

    let class = ctx
        .service
        .update_class(user_id, &args.id, &builder.build())
        .await?;
    output(&class, flags.format)
}

use roll_db::repos::attendance::AttendanceFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::date::parse_optional_date;
use crate::commands::shared::limit::{effective_limit, truncation_notice};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    user_id: &str,
    from: Option<&str>,
    to: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    let filter = AttendanceFilter {
        from: parse_optional_date(from, "from")?,
        to: parse_optional_date(to, "to")?,
        limit: Some(limit),
    };
    let records = ctx.service.list_attendance(user_id, &filter).await?;
    output(&records, flags.format)?;
    if let Some(notice) = truncation_notice(records.len(), limit)
        .filter(|_| !flags.quiet)
    {
        eprintln!("{notice}");
    }
    Ok(())
}

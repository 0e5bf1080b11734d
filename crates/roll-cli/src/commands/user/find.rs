use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(email: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.service.find_user_by_email(email).await? {
        Some(user) => output(&user, flags.format),
        None => bail!("user not found: {email}"),
    }
}

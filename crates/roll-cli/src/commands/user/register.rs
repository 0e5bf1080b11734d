use roll_core::entities::NewUser;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RegisterArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &RegisterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = NewUser {
        fullname: args.fullname.clone(),
        department: args.department.clone(),
        semester: args.semester.clone(),
        batch: args.batch.clone(),
        roll_number: args.roll_number.clone(),
        ..NewUser::new(&args.email, &args.credential_hash)
    };
    let user = ctx.service.register_user(&new).await?;
    output(&user, flags.format)
}

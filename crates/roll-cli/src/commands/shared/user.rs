use anyhow::bail;
use roll_core::ids::{PREFIX_USER, has_prefix};

use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Environment variable consulted when `--user` is not passed.
pub const USER_ENV: &str = "ROLL_USER";

/// Resolve the acting user to an id.
///
/// Accepts a `usr-` id or a registered email (case-insensitive). Both must
/// name an existing user.
pub async fn require_user_id(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<String> {
    let env = std::env::var(USER_ENV).ok();
    let Some(selector) = user_selector(flags.user.as_deref(), env.as_deref()) else {
        bail!("no user selected: pass --user <id|email> or set {USER_ENV}");
    };

    if has_prefix(&selector, PREFIX_USER) {
        return Ok(ctx.service.get_user(&selector).await?.id);
    }
    if !selector.contains('@') {
        bail!("invalid user '{selector}': expected a {PREFIX_USER}- id or an email");
    }
    match ctx.service.find_user_by_email(&selector).await? {
        Some(user) => Ok(user.id),
        None => bail!("user not found: {selector}"),
    }
}

fn user_selector(flag: Option<&str>, env: Option<&str>) -> Option<String> {
    flag.or(env)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::user_selector;

    #[test]
    fn flag_beats_environment() {
        assert_eq!(
            user_selector(Some("usr-1"), Some("usr-2")).as_deref(),
            Some("usr-1")
        );
    }

    #[test]
    fn environment_used_without_flag() {
        assert_eq!(
            user_selector(None, Some(" a@b.c ")).as_deref(),
            Some("a@b.c")
        );
    }

    #[test]
    fn blank_selector_is_none() {
        assert_eq!(user_selector(Some("  "), None), None);
        assert_eq!(user_selector(None, None), None);
    }
}

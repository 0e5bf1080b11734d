use anyhow::Context;
use roll_config::RollConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, TOML, and `ROLL_*` configuration, then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RollConfig> {
    let mut config = RollConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut RollConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "database path overridden by --db");
        config.database.path.clone_from(db);
        config.validate().context("invalid --db value")?;
    }
    Ok(())
}

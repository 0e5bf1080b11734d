use anyhow::Context;
use roll_config::RollConfig;
use roll_db::service::RollService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: RollService,
    pub config: RollConfig,
}

impl AppContext {
    /// Open the configured database, creating its directory if needed.
    pub async fn init(config: RollConfig) -> anyhow::Result<Self> {
        let service = RollService::from_config(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        tracing::debug!(path = %config.database.path, "rollcall database ready");
        Ok(Self { service, config })
    }
}

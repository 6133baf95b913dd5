use invoice_core::config as core_config;
use invoice_core::config::{require_env, Environment};
use invoice_core::error::AppError;

#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub common: core_config::Config,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one `{id}.json` per shared invoice.
    pub path: String,
    /// Shares older than this are deleted by the purge sweep.
    pub retention_days: u64,
}

impl ShareConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix
        let common = core_config::Config::load()?;
        let environment = Environment::detect();

        Ok(ShareConfig {
            common,
            storage: StorageConfig {
                path: require_env("SHARE_STORE_PATH", Some("data/shares"), environment)?,
                retention_days: require_env("SHARE_RETENTION_DAYS", Some("30"), environment)?
                    .parse()
                    .map_err(|e| {
                        AppError::ConfigError(anyhow::anyhow!(
                            "SHARE_RETENTION_DAYS must be a whole number of days: {}",
                            e
                        ))
                    })?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ShareConfig;

    #[test]
    fn storage_settings_default_outside_production() {
        let config = ShareConfig::load().expect("Failed to load configuration");
        assert_eq!(config.storage.path, "data/shares");
        assert_eq!(config.storage.retention_days, 30);
        assert_eq!(config.common.port, 8080);
    }
}

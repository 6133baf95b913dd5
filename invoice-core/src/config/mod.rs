use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Layered load: optional `configuration` file, then `APP__`-prefixed
    /// environment variables; `.env` is read first so both see it.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Deployment environment. Anything other than `ENVIRONMENT=prod` is dev;
/// the distinction only controls whether settings may fall back to
/// defaults (see [`require_env`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn detect() -> Self {
        match env::var("ENVIRONMENT").as_deref() {
            Ok("prod") => Environment::Prod,
            _ => Environment::Dev,
        }
    }

    pub fn is_prod(self) -> bool {
        self == Environment::Prod
    }
}

/// Read a service-level setting from the environment. Outside production a
/// missing variable falls back to `default`; in production every setting
/// must be explicit.
pub fn require_env(
    key: &str,
    default: Option<&str>,
    environment: Environment,
) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if environment.is_prod() {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

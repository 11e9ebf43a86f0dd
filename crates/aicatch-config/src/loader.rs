//! Configuration loader (file + env merge).

use aicatch_types::AccessPolicy;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::AicatchConfig;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// The merged configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`AICATCH_` prefix, `__` between sections,
///    e.g. `AICATCH_SERVER__PORT=8080`)
pub fn load_config(config_path: Option<&str>) -> Result<AicatchConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(AicatchConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("AICATCH_").split("__"));

    let config: AicatchConfig = figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Checks cross-field constraints that serde cannot express.
pub fn validate(config: &AicatchConfig) -> Result<(), ConfigError> {
    let has_token = config
        .auth
        .token
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    if config.auth.policy != AccessPolicy::Open && !has_token {
        return Err(ConfigError::Invalid(format!(
            "auth.policy = \"{}\" requires auth.token",
            config.auth.policy
        )));
    }
    if config.client.concurrency == 0 {
        return Err(ConfigError::Invalid(
            "client.concurrency must be at least 1".into(),
        ));
    }
    Ok(())
}

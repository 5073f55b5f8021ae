//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Values supplied on the command line (or its environment) that take
/// precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `api.base`; `Some("")` forces same-origin requests.
    pub api_base: Option<String>,
    /// Replaces `api.origin`.
    pub origin: Option<String>,
}

impl ConfigOverrides {
    /// Apply to `config`, then validate the merged result.
    pub fn apply(&self, mut config: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(base) = &self.api_base {
            config.api.base = base.clone();
        }
        if let Some(origin) = &self.origin {
            config.api.origin = Some(origin.clone());
        }
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

/// Load the file (or defaults when `path` is `None`), merge `overrides`
/// and validate once, so an override can replace a bad file value.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AppConfig, ConfigError> {
    let config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };
    overrides.apply(config)
}

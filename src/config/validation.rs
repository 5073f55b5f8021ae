//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("api.base `{value}` is not an absolute URL: {reason}")]
    InvalidBase { value: String, reason: String },

    #[error("api.base `{0}` must use http or https")]
    UnsupportedScheme(String),

    #[error("api.base `{0}` must not carry a query or fragment")]
    BaseHasQuery(String),

    #[error("api.origin `{value}` is not an absolute URL: {reason}")]
    InvalidOrigin { value: String, reason: String },

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = config.api.base.as_str();
    if !base.is_empty() {
        match Url::parse(base) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(ValidationError::UnsupportedScheme(base.to_string()));
                }
                if url.query().is_some() || url.fragment().is_some() {
                    errors.push(ValidationError::BaseHasQuery(base.to_string()));
                }
            }
            Err(e) => errors.push(ValidationError::InvalidBase {
                value: base.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    if let Some(origin) = &config.api.origin {
        if let Err(e) = Url::parse(origin) {
            errors.push(ValidationError::InvalidOrigin {
                value: origin.clone(),
                reason: e.to_string(),
            });
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

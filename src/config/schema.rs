//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the client shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Analysis backend settings.
    pub api: ApiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Where the analysis backend lives.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin prefixed to API paths (e.g., "https://ops.example.com").
    /// Empty means same-origin relative requests.
    pub base: String,

    /// Page origin used to resolve relative request targets.
    pub origin: Option<String>,
}

impl ApiConfig {
    /// The base with any trailing slash removed, ready for path concatenation.
    pub fn normalized_base(&self) -> &str {
        self.base.trim_end_matches('/')
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format for log lines.
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base, "");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base = "http://localhost:8000/"

            [observability]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.normalized_base(), "http://localhost:8000");
        assert_eq!(config.api.origin, None);
        assert_eq!(config.observability.format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }
}

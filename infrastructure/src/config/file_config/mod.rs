//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod crash;
mod logger;
mod tracing_output;

pub use crash::FileCrashConfig;
pub use logger::FileLoggerConfig;
pub use tracing_output::FileTracingConfig;

use logbridge_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("[crash] {0}")]
    InvalidCrashThresholds(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Logger façade settings
    pub logger: FileLoggerConfig,
    /// Crash bridge settings
    pub crash: FileCrashConfig,
    /// Tracing writer settings
    pub tracing: FileTracingConfig,
}

impl FileConfig {
    /// Validate the configuration.
    ///
    /// Crash thresholds are only checked when the bridge is enabled.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.crash.enabled {
            self.crash.thresholds()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbridge_domain::Severity;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[logger]
min_severity = "info"
default_tag = "app"

[crash]
enabled = true
min_severity = "info"
min_crash_severity = "error"
print_tag = false

[tracing]
enabled = false
min_severity = "debug"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logger.min_severity, Severity::Info);
        assert_eq!(config.logger.default_tag, Some("app".to_string()));
        assert_eq!(config.crash.min_crash_severity, Severity::Error);
        assert!(!config.crash.print_tag);
        assert!(!config.tracing.enabled);
        assert_eq!(config.tracing.min_severity, Severity::Debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[crash]
min_crash_severity = "assert"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.crash.min_severity, Severity::Info);
        assert_eq!(config.crash.min_crash_severity, Severity::Assert);
        assert_eq!(config.logger, FileLoggerConfig::default());
        assert!(config.tracing.enabled);
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[logger]\nmin_severity = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_thresholds() {
        let mut config = FileConfig::default();
        config.crash.min_severity = Severity::Warn;
        config.crash.min_crash_severity = Severity::Info;

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "[crash] min_severity (warn) cannot be greater than min_crash_severity (info)"
        );

        config.crash.enabled = false;
        assert!(config.validate().is_ok());
    }
}

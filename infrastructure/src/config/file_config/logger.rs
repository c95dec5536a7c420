//! Logger configuration from TOML (`[logger]` section)

use logbridge_application::LoggerConfig;
use logbridge_domain::Severity;
use serde::{Deserialize, Serialize};

/// Raw logger configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    /// Façade floor; events below it reach no writer
    pub min_severity: Severity,
    /// Tag used when a call site gives none
    pub default_tag: Option<String>,
}

impl FileLoggerConfig {
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            min_severity: self.min_severity,
            default_tag: self.default_tag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_section_deserialize() {
        let toml_str = r#"
[logger]
min_severity = "warn"
default_tag = "app"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let logger = config.logger.to_logger_config();
        assert_eq!(logger.min_severity, Severity::Warn);
        assert_eq!(logger.default_tag, Some("app".to_string()));
    }
}

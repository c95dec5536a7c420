//! Logger configuration — façade floor and default tag.
//!
//! [`LoggerConfig`] holds the static parameters of a
//! [`Logger`](crate::use_cases::logger::Logger). Writer floors are owned by
//! the writers themselves and are not part of this struct.

use logbridge_domain::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Events below this severity are dropped before any writer is consulted.
    pub min_severity: Severity,
    /// Tag used when a call does not provide one.
    pub default_tag: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Verbose,
            default_tag: None,
        }
    }
}

impl LoggerConfig {
    // ==================== Builder Methods ====================

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = Some(tag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_severity, Severity::Verbose);
        assert!(config.default_tag.is_none());
    }

    #[test]
    fn test_builder() {
        let config = LoggerConfig::default()
            .with_min_severity(Severity::Warn)
            .with_default_tag("app");

        assert_eq!(config.min_severity, Severity::Warn);
        assert_eq!(config.default_tag, Some("app".to_string()));
    }

    #[test]
    fn test_deserialize() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"min_severity":"info","default_tag":null}"#).unwrap();
        assert_eq!(config.min_severity, Severity::Info);
    }
}

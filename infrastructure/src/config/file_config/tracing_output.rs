//! Tracing writer configuration from TOML (`[tracing]` section)

use logbridge_domain::Severity;
use serde::{Deserialize, Serialize};

/// Raw tracing writer configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTracingConfig {
    /// Forward events to the `tracing` subscriber
    pub enabled: bool,
    /// Writer floor
    pub min_severity: Severity,
}

impl Default for FileTracingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_severity: Severity::Verbose,
        }
    }
}

//! Crash bridge configuration from TOML (`[crash]` section)

use logbridge_domain::{CrashThresholds, DomainError, Severity};
use serde::{Deserialize, Serialize};

/// Raw crash bridge configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCrashConfig {
    /// Attach a crash-bridging writer to the logger
    pub enabled: bool,
    /// Floor for breadcrumbs
    pub min_severity: Severity,
    /// Floor for crash reports; must not be below `min_severity`
    pub min_crash_severity: Severity,
    /// Prefix breadcrumbs with the event tag
    pub print_tag: bool,
}

impl Default for FileCrashConfig {
    fn default() -> Self {
        let thresholds = CrashThresholds::default();
        Self {
            enabled: true,
            min_severity: thresholds.accept_floor(),
            min_crash_severity: thresholds.escalate_floor(),
            print_tag: true,
        }
    }
}

impl FileCrashConfig {
    pub fn thresholds(&self) -> Result<CrashThresholds, DomainError> {
        CrashThresholds::new(self.min_severity, self.min_crash_severity)
    }
}

//! Acceptance / escalation floor pair for crash-bridging writers.

use crate::core::error::DomainError;
use crate::logging::severity::Severity;

/// Two ordered floors: events at or above `accept_floor` are accepted,
/// those at or above `escalate_floor` may become crash reports.
///
/// Construction guarantees `accept_floor <= escalate_floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrashThresholds {
    accept_floor: Severity,
    escalate_floor: Severity,
}

impl CrashThresholds {
    pub fn new(accept_floor: Severity, escalate_floor: Severity) -> Result<Self, DomainError> {
        if accept_floor > escalate_floor {
            return Err(DomainError::InvalidThresholds {
                accept: accept_floor,
                escalate: escalate_floor,
            });
        }
        Ok(Self {
            accept_floor,
            escalate_floor,
        })
    }

    pub fn accept_floor(&self) -> Severity {
        self.accept_floor
    }

    pub fn escalate_floor(&self) -> Severity {
        self.escalate_floor
    }

    pub fn accepts(&self, severity: Severity) -> bool {
        severity.is_at_least(self.accept_floor)
    }

    pub fn escalates(&self, severity: Severity) -> bool {
        severity.is_at_least(self.escalate_floor)
    }
}

impl Default for CrashThresholds {
    fn default() -> Self {
        Self {
            accept_floor: Severity::Info,
            escalate_floor: Severity::Warn,
        }
    }
}

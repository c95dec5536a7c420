//! Domain error types

use crate::logging::severity::Severity;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The escalation floor sits below the acceptance floor.
    #[error("min_severity ({accept}) cannot be greater than min_crash_severity ({escalate})")]
    InvalidThresholds {
        accept: Severity,
        escalate: Severity,
    },

    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),
}

impl DomainError {
    /// Check if this error comes from a misconfigured threshold pair
    pub fn is_configuration(&self) -> bool {
        matches!(self, DomainError::InvalidThresholds { .. })
    }
}

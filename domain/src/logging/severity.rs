//! Severity levels for log events.
//!
//! [`Severity`] is a totally ordered urgency scale. Every threshold check in
//! the crate goes through [`Severity::is_at_least`], which compares ranks:
//! `Verbose < Debug < Info < Warn < Error < Assert`.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency level of a log event.
///
/// The derived ordering follows declaration order, so `a >= b` means
/// "`a` is at least as urgent as `b`".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fine-grained tracing output
    #[default]
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// Conditions that should never happen
    Assert,
}

impl Severity {
    /// Every level, least urgent first.
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Assert,
    ];

    /// Numeric rank used for threshold comparisons.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Verbose => 0,
            Severity::Debug => 1,
            Severity::Info => 2,
            Severity::Warn => 3,
            Severity::Error => 4,
            Severity::Assert => 5,
        }
    }

    /// `true` when this level reaches `threshold`.
    pub fn is_at_least(self, threshold: Severity) -> bool {
        self.rank() >= threshold.rank()
    }

    /// Lowercase label, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Assert => "assert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verbose" | "v" | "trace" => Ok(Severity::Verbose),
            "debug" | "d" => Ok(Severity::Debug),
            "info" | "i" => Ok(Severity::Info),
            "warn" | "warning" | "w" => Ok(Severity::Warn),
            "error" | "e" => Ok(Severity::Error),
            "assert" | "a" | "wtf" => Ok(Severity::Assert),
            _ => Err(DomainError::InvalidSeverity(s.to_string())),
        }
    }
}

//! Crash-reporting sink port.
//!
//! The backend that receives breadcrumbs and crash reports lives outside
//! this crate. Adapters implement [`CrashReportingSink`]; the
//! crash-bridging writer in the infrastructure layer drives it.
//!
//! # Contract
//!
//! - `leave_breadcrumb` records a lightweight trail message
//! - `notify` submits a structured [`CrashReport`]
//!
//! Both calls are synchronous. A failure is returned to the caller as-is;
//! the bridge does not retry or swallow it.

use logbridge_domain::CrashReport;
use thiserror::Error;

/// Failure reported by a crash-reporting backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Crash sink unavailable: {0}")]
    Unavailable(String),

    #[error("Crash sink rejected the submission: {0}")]
    Rejected(String),
}

/// Port for an external crash-reporting backend.
pub trait CrashReportingSink: Send + Sync {
    /// Record a breadcrumb message.
    fn leave_breadcrumb(&self, message: &str) -> Result<(), SinkError>;

    /// Submit a crash report.
    fn notify(&self, report: &CrashReport) -> Result<(), SinkError>;
}

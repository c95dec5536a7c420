//! Writer that bridges log events into a crash-reporting backend.
//!
//! Every accepted event becomes a breadcrumb. Events that also carry an
//! error and reach the escalation floor are turned into a [`CrashReport`]
//! and submitted as well:
//!
//! ```text
//! log(event)
//!   │
//!   ├─ severity < accept_floor ─────────────> ignored
//!   │
//!   ├─ leave_breadcrumb("<tag> : <message>")  (always)
//!   │
//!   └─ error present && severity >= escalate_floor
//!            └─ notify(CrashReport::from(extract(error)))
//! ```
//!
//! Sink failures are returned to the caller untouched.

use logbridge_application::{CrashReportingSink, LogError, LogWriter};
use logbridge_domain::{CrashReport, CrashThresholds, DomainError, LogEvent, Severity, extract};
use std::sync::Arc;
use tracing::debug;

pub struct CrashBridgeWriter {
    sink: Arc<dyn CrashReportingSink>,
    thresholds: CrashThresholds,
    include_tag: bool,
}

impl CrashBridgeWriter {
    /// Bridge with validated thresholds. Tags are included in breadcrumbs.
    pub fn new(sink: Arc<dyn CrashReportingSink>, thresholds: CrashThresholds) -> Self {
        Self {
            sink,
            thresholds,
            include_tag: true,
        }
    }

    /// Bridge from raw floors; fails when `accept_floor > escalate_floor`.
    pub fn with_floors(
        sink: Arc<dyn CrashReportingSink>,
        accept_floor: Severity,
        escalate_floor: Severity,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            sink,
            CrashThresholds::new(accept_floor, escalate_floor)?,
        ))
    }

    pub fn with_include_tag(mut self, include_tag: bool) -> Self {
        self.include_tag = include_tag;
        self
    }

    pub fn thresholds(&self) -> CrashThresholds {
        self.thresholds
    }

    /// Breadcrumb text for an event.
    pub fn breadcrumb(&self, event: &LogEvent) -> String {
        match event.tag() {
            Some(tag) if self.include_tag => format!("{} : {}", tag, event.message()),
            _ => event.message().to_string(),
        }
    }
}

impl LogWriter for CrashBridgeWriter {
    fn is_loggable(&self, severity: Severity) -> bool {
        self.thresholds.accepts(severity)
    }

    fn log(&self, event: &LogEvent) -> Result<(), LogError> {
        if !self.is_loggable(event.severity()) {
            return Ok(());
        }

        self.sink.leave_breadcrumb(&self.breadcrumb(event))?;

        if let Some(error) = event.error()
            && self.thresholds.escalates(event.severity())
        {
            let report = CrashReport::from(extract(error));
            debug!(
                "Escalating {} event to crash report: {} ({} frames)",
                event.severity(),
                report.name(),
                report.call_stack_return_addresses().len()
            );
            self.sink.notify(&report)?;
        }

        Ok(())
    }
}

//! In-memory crash sink.
//!
//! Keeps every breadcrumb and report it receives in a single call log, so
//! the relative order of breadcrumbs and reports stays observable. A sink
//! built with [`RecordingCrashSink::failing`] rejects every call, and one
//! built with [`RecordingCrashSink::failing_notify`] accepts breadcrumbs but
//! rejects reports. That is how callers exercise sink-failure propagation.

use logbridge_application::{CrashReportingSink, SinkError};
use logbridge_domain::CrashReport;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One accepted call on a [`RecordingCrashSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Breadcrumb(String),
    Notify(CrashReport),
}

#[derive(Default)]
pub struct RecordingCrashSink {
    calls: Mutex<Vec<SinkCall>>,
    breadcrumb_failure: Option<SinkError>,
    notify_failure: Option<SinkError>,
}

impl RecordingCrashSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every call fails with `error`.
    pub fn failing(error: SinkError) -> Self {
        Self {
            breadcrumb_failure: Some(error.clone()),
            notify_failure: Some(error),
            ..Self::default()
        }
    }

    /// A sink that records breadcrumbs but fails every `notify` with `error`.
    pub fn failing_notify(error: SinkError) -> Self {
        Self {
            notify_failure: Some(error),
            ..Self::default()
        }
    }

    /// Every accepted call, in arrival order.
    pub fn calls(&self) -> Vec<SinkCall> {
        lock(&self.calls).clone()
    }

    pub fn breadcrumbs(&self) -> Vec<String> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                SinkCall::Breadcrumb(message) => Some(message.clone()),
                SinkCall::Notify(_) => None,
            })
            .collect()
    }

    pub fn reports(&self) -> Vec<CrashReport> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                SinkCall::Notify(report) => Some(report.clone()),
                SinkCall::Breadcrumb(_) => None,
            })
            .collect()
    }

    fn record(&self, failure: &Option<SinkError>, call: SinkCall) -> Result<(), SinkError> {
        if let Some(error) = failure {
            return Err(error.clone());
        }
        lock(&self.calls).push(call);
        Ok(())
    }
}

impl CrashReportingSink for RecordingCrashSink {
    fn leave_breadcrumb(&self, message: &str) -> Result<(), SinkError> {
        self.record(
            &self.breadcrumb_failure,
            SinkCall::Breadcrumb(message.to_string()),
        )
    }

    fn notify(&self, report: &CrashReport) -> Result<(), SinkError> {
        self.record(&self.notify_failure, SinkCall::Notify(report.clone()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let sink = RecordingCrashSink::new();
        sink.leave_breadcrumb("first").unwrap();
        sink.notify(&CrashReport::new("Boom", "", vec![1])).unwrap();
        sink.leave_breadcrumb("second").unwrap();

        assert_eq!(
            sink.calls(),
            vec![
                SinkCall::Breadcrumb("first".to_string()),
                SinkCall::Notify(CrashReport::new("Boom", "", vec![1])),
                SinkCall::Breadcrumb("second".to_string()),
            ]
        );
        assert_eq!(sink.breadcrumbs(), vec!["first", "second"]);
        assert_eq!(sink.reports().len(), 1);
    }

    #[test]
    fn test_failing_sink_records_nothing() {
        let sink = RecordingCrashSink::failing(SinkError::Rejected("quota".to_string()));

        assert_eq!(
            sink.leave_breadcrumb("x"),
            Err(SinkError::Rejected("quota".to_string()))
        );
        assert!(sink.notify(&CrashReport::new("Boom", "", vec![])).is_err());
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn test_failing_notify_still_records_breadcrumbs() {
        let sink = RecordingCrashSink::failing_notify(SinkError::Unavailable("down".to_string()));

        sink.leave_breadcrumb("kept").unwrap();
        assert_eq!(
            sink.notify(&CrashReport::new("Boom", "", vec![])),
            Err(SinkError::Unavailable("down".to_string()))
        );
        assert_eq!(sink.calls(), vec![SinkCall::Breadcrumb("kept".to_string())]);
    }
}

//! Log writer port.
//!
//! A [`LogWriter`] is a sink for accepted log events. The [`Logger`]
//! façade checks its own floor, then hands each event to every writer whose
//! [`is_loggable`](LogWriter::is_loggable) accepts the severity.
//!
//! Writers must still tolerate being called directly: `log` re-checks the
//! writer's own floor and ignores events below it.
//!
//! [`Logger`]: crate::use_cases::logger::Logger

use super::crash_sink::SinkError;
use logbridge_domain::{LogEvent, Severity};
use thiserror::Error;

/// Errors surfaced by a writer's `log` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Port for a log event consumer.
pub trait LogWriter: Send + Sync {
    /// Whether this writer wants events of the given severity.
    fn is_loggable(&self, severity: Severity) -> bool;

    /// Consume an event. Absent tag or error must never fail.
    fn log(&self, event: &LogEvent) -> Result<(), LogError>;
}

/// Writer that accepts nothing, for loggers that are switched off.
pub struct NoLogWriter;

impl LogWriter for NoLogWriter {
    fn is_loggable(&self, _severity: Severity) -> bool {
        false
    }

    fn log(&self, _event: &LogEvent) -> Result<(), LogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_is_transparent() {
        let err = LogError::from(SinkError::Unavailable("offline".to_string()));
        assert_eq!(err.to_string(), "Crash sink unavailable: offline");
    }

    #[test]
    fn test_no_log_writer_rejects_everything() {
        let writer = NoLogWriter;
        for severity in Severity::ALL {
            assert!(!writer.is_loggable(severity));
        }
        assert!(writer.log(&LogEvent::new(Severity::Assert, "x")).is_ok());
    }
}

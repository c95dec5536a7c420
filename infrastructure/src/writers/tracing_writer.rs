//! Writer that forwards events to the `tracing` ecosystem.
//!
//! Whatever subscriber the host installed decides where the output ends up.

use logbridge_application::{LogError, LogWriter};
use logbridge_domain::{LogEvent, Severity};

/// Emits one `tracing` event per log event, with `tag` and `error` fields.
///
/// | Severity        | tracing level |
/// |-----------------|---------------|
/// | Verbose         | TRACE         |
/// | Debug           | DEBUG         |
/// | Info            | INFO          |
/// | Warn            | WARN          |
/// | Error, Assert   | ERROR         |
pub struct TracingWriter {
    floor: Severity,
}

impl TracingWriter {
    pub fn new() -> Self {
        Self::with_floor(Severity::Verbose)
    }

    pub fn with_floor(floor: Severity) -> Self {
        Self { floor }
    }
}

impl Default for TracingWriter {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! emit {
    ($level:expr, $event:expr, $tag:expr, $error:expr) => {
        tracing::event!(
            target: "logbridge",
            $level,
            tag = $tag,
            error = $error,
            "{}",
            $event.message()
        )
    };
}

impl LogWriter for TracingWriter {
    fn is_loggable(&self, severity: Severity) -> bool {
        severity.is_at_least(self.floor)
    }

    fn log(&self, event: &LogEvent) -> Result<(), LogError> {
        if !self.is_loggable(event.severity()) {
            return Ok(());
        }

        let tag = event.tag().unwrap_or_default();
        let error = event.error().map(|e| e.to_string());
        let error = error.as_deref();

        match event.severity() {
            Severity::Verbose => emit!(tracing::Level::TRACE, event, tag, error),
            Severity::Debug => emit!(tracing::Level::DEBUG, event, tag, error),
            Severity::Info => emit!(tracing::Level::INFO, event, tag, error),
            Severity::Warn => emit!(tracing::Level::WARN, event, tag, error),
            Severity::Error | Severity::Assert => emit!(tracing::Level::ERROR, event, tag, error),
        }
        Ok(())
    }
}

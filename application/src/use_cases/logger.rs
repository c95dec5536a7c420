//! Logger façade — the single dispatch point for log events.
//!
//! ```text
//! Logger::log(severity, message, tag, error)
//!        │
//!        ├─ severity < min_severity ──> no-op
//!        │
//!        └─ LogEvent ──┬──> writer A (is_loggable? → log)
//!                      ├──> writer B (is_loggable? → log)
//!                      └──> ...
//! ```
//!
//! Each writer keeps its own floor, so a logger fanning out to writers with
//! different floors routes correctly without knowing their thresholds.

use crate::config::LoggerConfig;
use crate::ports::log_writer::{LogError, LogWriter};
use logbridge_domain::{LogEvent, Severity, ThrownError};
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    config: LoggerConfig,
    writers: Vec<Arc<dyn LogWriter>>,
}

/// Generates the per-severity shorthands (`info`, `warn`, ...).
macro_rules! severity_shorthand {
    ($($(#[$doc:meta])* $name:ident => $severity:expr),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, message: impl Into<String>) -> Result<(), LogError> {
                self.log($severity, message, None, None)
            }
        )*
    };
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            writers: Vec::new(),
        }
    }

    /// Add a writer. Every writer independently receives accepted events.
    pub fn with_writer(mut self, writer: Arc<dyn LogWriter>) -> Self {
        self.writers.push(writer);
        self
    }

    /// A logger sharing this one's writers, with a different default tag.
    pub fn with_tag(&self, tag: impl Into<String>) -> Self {
        Self {
            config: self.config.clone().with_default_tag(tag),
            writers: self.writers.clone(),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn writer_count(&self) -> usize {
        self.writers.len()
    }

    /// `true` when the floor accepts `severity` and at least one writer wants it.
    pub fn is_loggable(&self, severity: Severity) -> bool {
        severity.is_at_least(self.config.min_severity)
            && self.writers.iter().any(|w| w.is_loggable(severity))
    }

    /// Log an event.
    ///
    /// Below the configured floor this returns immediately. Otherwise the
    /// event goes to every loggable writer in registration order. A failing
    /// writer does not stop the fan-out: the remaining writers still receive
    /// the event and the first error is returned unchanged afterwards.
    pub fn log(
        &self,
        severity: Severity,
        message: impl Into<String>,
        tag: Option<&str>,
        error: Option<Arc<ThrownError>>,
    ) -> Result<(), LogError> {
        if !severity.is_at_least(self.config.min_severity) {
            return Ok(());
        }
        self.dispatch(self.build_event(severity, message.into(), tag, error))
    }

    /// Like [`log`](Self::log), but the message is only built when some
    /// writer will actually receive it.
    pub fn log_with<F>(
        &self,
        severity: Severity,
        tag: Option<&str>,
        error: Option<Arc<ThrownError>>,
        message: F,
    ) -> Result<(), LogError>
    where
        F: FnOnce() -> String,
    {
        if !self.is_loggable(severity) {
            return Ok(());
        }
        self.dispatch(self.build_event(severity, message(), tag, error))
    }

    severity_shorthand! {
        verbose => Severity::Verbose,
        debug => Severity::Debug,
        info => Severity::Info,
        warn => Severity::Warn,
        error => Severity::Error,
        /// Log something that should never happen.
        assert => Severity::Assert,
    }

    fn build_event(
        &self,
        severity: Severity,
        message: String,
        tag: Option<&str>,
        error: Option<Arc<ThrownError>>,
    ) -> LogEvent {
        let tag = tag
            .map(str::to_string)
            .or_else(|| self.config.default_tag.clone());
        LogEvent::new(severity, message)
            .with_optional_tag(tag)
            .with_optional_error(error)
    }

    fn dispatch(&self, event: LogEvent) -> Result<(), LogError> {
        let mut first_error = None;
        for writer in &self.writers {
            if !writer.is_loggable(event.severity()) {
                continue;
            }
            if let Err(e) = writer.log(&event)
                && first_error.is_none()
            {
                first_error = Some(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("writers", &self.writers.len())
            .finish()
    }
}

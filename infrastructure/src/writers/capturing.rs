//! In-memory writer that keeps every accepted event.
//!
//! Entries are appended under a `Mutex<Vec<LogEvent>>`, so any number of
//! threads may log concurrently without losing or tearing entries. Reads
//! return copies: a snapshot never changes after it is taken.

use logbridge_application::{LogError, LogWriter};
use logbridge_domain::{LogEvent, Severity};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe capturing writer.
///
/// Used by tests and by any consumer that needs a record of what was logged.
pub struct CapturingWriter {
    floor: Severity,
    entries: Mutex<Vec<LogEvent>>,
}

impl CapturingWriter {
    /// Capture everything, from `Verbose` up.
    pub fn new() -> Self {
        Self::with_floor(Severity::Verbose)
    }

    pub fn with_floor(floor: Severity) -> Self {
        Self {
            floor,
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn floor(&self) -> Severity {
        self.floor
    }

    /// Copy of the captured entries, in insertion order.
    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.entries().clone()
    }

    pub fn count(&self) -> usize {
        self.entries().len()
    }

    pub fn last(&self) -> Option<LogEvent> {
        self.entries().last().cloned()
    }

    /// Clear every captured entry.
    pub fn reset(&self) {
        self.entries().clear();
    }

    /// Panic unless exactly `expected` entries were captured.
    #[track_caller]
    pub fn assert_count(&self, expected: usize) {
        assert_eq!(self.count(), expected, "unexpected number of captured entries");
    }

    /// Panic if nothing was captured, or if `check` rejects the newest entry.
    #[track_caller]
    pub fn assert_last<F>(&self, check: F)
    where
        F: FnOnce(&LogEvent) -> bool,
    {
        match self.last() {
            Some(entry) => assert!(check(&entry), "last captured entry did not match: {entry:?}"),
            None => panic!("assert_last called but no entries were captured"),
        }
    }

    // Pushes either complete or never start, so a poisoned Vec is still consistent.
    fn entries(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CapturingWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for CapturingWriter {
    fn is_loggable(&self, severity: Severity) -> bool {
        severity.is_at_least(self.floor)
    }

    fn log(&self, event: &LogEvent) -> Result<(), LogError> {
        if self.is_loggable(event.severity()) {
            self.entries().push(event.clone());
        }
        Ok(())
    }
}

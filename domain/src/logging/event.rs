//! Log event value object

use super::severity::Severity;
use crate::crash::thrown::ThrownError;
use std::sync::Arc;

/// One logged event: severity, message, optional tag and optional error.
///
/// Created once per `log` call and never mutated afterwards. The error is
/// shared behind an `Arc` so writers can retain a copy cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    severity: Severity,
    message: String,
    tag: Option<String>,
    error: Option<Arc<ThrownError>>,
}

impl LogEvent {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            tag: None,
            error: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_optional_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_error(mut self, error: Arc<ThrownError>) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_optional_error(mut self, error: Option<Arc<ThrownError>>) -> Self {
        self.error = error;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn error(&self) -> Option<&Arc<ThrownError>> {
        self.error.as_ref()
    }
}

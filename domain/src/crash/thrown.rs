//! Error handle attached to log events.
//!
//! [`ThrownError`] is a plain-data snapshot of a raised error: its symbolic
//! name, an optional message, the raw return addresses produced by the
//! platform unwinder, and an optional cause. Addresses are kept innermost
//! frame first, exactly as the unwinder reported them.

use std::error::Error;
use std::fmt;

/// Name used for causes whose concrete type is erased behind `dyn Error`.
const ERASED_CAUSE_NAME: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrownError {
    name: String,
    message: Option<String>,
    return_addresses: Vec<u64>,
    cause: Option<Box<ThrownError>>,
}

impl ThrownError {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: None,
            return_addresses: Vec::new(),
            cause: None,
        }
    }

    /// Snapshot an arbitrary [`Error`] value.
    ///
    /// The name is the unqualified type name of `E`; the `source()` chain is
    /// carried over as causes. No stack is captured here.
    pub fn capture<E: Error>(error: &E) -> Self {
        let mut thrown = Self::new(short_type_name(std::any::type_name::<E>()))
            .with_message(error.to_string());
        if let Some(source) = error.source() {
            thrown.cause = Some(Box::new(Self::from_source(source)));
        }
        thrown
    }

    fn from_source(error: &(dyn Error + 'static)) -> Self {
        let mut thrown = Self::new(ERASED_CAUSE_NAME).with_message(error.to_string());
        if let Some(source) = error.source() {
            thrown.cause = Some(Box::new(Self::from_source(source)));
        }
        thrown
    }

    // ==================== Builder Methods ====================

    /// Set the message. An empty string counts as no message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.is_empty()).then_some(message);
        self
    }

    pub fn with_return_addresses(mut self, addresses: impl IntoIterator<Item = u64>) -> Self {
        self.return_addresses = addresses.into_iter().collect();
        self
    }

    pub fn with_cause(mut self, cause: ThrownError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    // ==================== Accessors ====================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn return_addresses(&self) -> &[u64] {
        &self.return_addresses
    }

    pub fn cause(&self) -> Option<&ThrownError> {
        self.cause.as_deref()
    }
}

impl fmt::Display for ThrownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.name, message),
            None => f.write_str(&self.name),
        }
    }
}

impl Error for ThrownError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }
}

/// `alloc::string::String` -> `String`, `foo::Wrapper<bar::X>` -> `Wrapper`.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

//! Structured crash report handed to the crash-reporting sink.

use super::extract::ExtractedException;
use serde::{Deserialize, Serialize};

/// A crash report: symbolic name, message and the call-stack return
/// addresses, in unwinder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrashReport {
    name: String,
    message: String,
    call_stack_return_addresses: Vec<u64>,
}

impl CrashReport {
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        call_stack_return_addresses: Vec<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            call_stack_return_addresses,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn call_stack_return_addresses(&self) -> &[u64] {
        &self.call_stack_return_addresses
    }
}

impl From<ExtractedException> for CrashReport {
    fn from(extracted: ExtractedException) -> Self {
        Self::new(extracted.name, extracted.description, extracted.addresses)
    }
}

//! Stack trace extraction.
//!
//! Turns a [`ThrownError`] into the `(name, description, addresses)` triple a
//! crash-reporting backend understands. Only the outermost error is read; any
//! cause chain is left out of the report.

use super::thrown::ThrownError;

/// Name, description and return addresses pulled from a thrown error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedException {
    pub name: String,
    pub description: String,
    /// Innermost frame first, as produced by the unwinder.
    pub addresses: Vec<u64>,
}

/// Extract the top-level error's name, message and stack.
///
/// A missing message becomes `""` and an error without frames yields an
/// empty address list; neither is treated as a failure.
pub fn extract(error: &ThrownError) -> ExtractedException {
    ExtractedException {
        name: error.name().to_string(),
        description: error.message().unwrap_or_default().to_string(),
        addresses: error.return_addresses().to_vec(),
    }
}

//! Crash bridging values: the error handle carried by events, the stack
//! extraction step and the report submitted to a crash-reporting sink.
//!
//! ```text
//! ThrownError ──extract()──> ExtractedException ──From──> CrashReport
//! ```

pub mod extract;
pub mod report;
pub mod thresholds;
pub mod thrown;

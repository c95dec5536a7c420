//! [`CrashReportingSink`](logbridge_application::CrashReportingSink) adapters.

mod recording_sink;
mod tracing_sink;

pub use recording_sink::{RecordingCrashSink, SinkCall};
pub use tracing_sink::{TracingCrashSink, format_addresses};

//! [`LogWriter`](logbridge_application::LogWriter) adapters.
//!
//! - [`CapturingWriter`] — keeps every accepted event in memory
//! - [`CrashBridgeWriter`] — breadcrumbs plus crash-report escalation
//! - [`TracingWriter`] — forwards to the installed `tracing` subscriber

mod capturing;
mod crash_bridge;
mod tracing_writer;

pub use capturing::CapturingWriter;
pub use crash_bridge::CrashBridgeWriter;
pub use tracing_writer::TracingWriter;

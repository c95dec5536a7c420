//! Crash sink that reports through `tracing`.
//!
//! Breadcrumbs go out at DEBUG and crash reports at ERROR, with the return
//! addresses rendered as hex. Used when no real crash backend is wired in.

use logbridge_application::{CrashReportingSink, SinkError};
use logbridge_domain::CrashReport;
use tracing::{debug, error};

pub struct TracingCrashSink;

impl CrashReportingSink for TracingCrashSink {
    fn leave_breadcrumb(&self, message: &str) -> Result<(), SinkError> {
        debug!(target: "logbridge::breadcrumb", "{}", message);
        Ok(())
    }

    fn notify(&self, report: &CrashReport) -> Result<(), SinkError> {
        error!(
            target: "logbridge::crash",
            name = report.name(),
            addresses = %format_addresses(report.call_stack_return_addresses()),
            "{}",
            report.message()
        );
        Ok(())
    }
}

/// `[0x1000, 0x2a]` style rendering of a call stack.
pub fn format_addresses(addresses: &[u64]) -> String {
    let rendered: Vec<String> = addresses.iter().map(|a| format!("{a:#x}")).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_addresses() {
        assert_eq!(format_addresses(&[]), "[]");
        assert_eq!(format_addresses(&[0x1000, 42]), "[0x1000, 0x2a]");
        assert_eq!(format_addresses(&[u64::MAX]), "[0xffffffffffffffff]");
    }

    #[test]
    fn test_never_fails() {
        let sink = TracingCrashSink;
        assert!(sink.leave_breadcrumb("crumb").is_ok());
        assert!(sink.notify(&CrashReport::new("Boom", "msg", vec![1, 2])).is_ok());
    }
}

//! Logger assembly from file configuration.

use crate::config::{ConfigValidationError, FileConfig};
use crate::writers::{CrashBridgeWriter, TracingWriter};
use logbridge_application::{CrashReportingSink, Logger};
use std::sync::Arc;
use tracing::debug;

/// Build a [`Logger`] with the writers the configuration enables.
///
/// The tracing writer is registered first, then the crash bridge over
/// `crash_sink`. Fails when the crash thresholds are inverted.
pub fn build_logger(
    config: &FileConfig,
    crash_sink: Arc<dyn CrashReportingSink>,
) -> Result<Logger, ConfigValidationError> {
    config.validate()?;

    let mut logger = Logger::new(config.logger.to_logger_config());

    if config.tracing.enabled {
        logger = logger.with_writer(Arc::new(TracingWriter::with_floor(
            config.tracing.min_severity,
        )));
    }

    if config.crash.enabled {
        let bridge = CrashBridgeWriter::new(crash_sink, config.crash.thresholds()?)
            .with_include_tag(config.crash.print_tag);
        logger = logger.with_writer(Arc::new(bridge));
    }

    debug!(
        "Logger built: floor={}, writers={}",
        config.logger.min_severity,
        logger.writer_count()
    );
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crash::RecordingCrashSink;
    use crate::writers::CapturingWriter;
    use logbridge_application::{LogError, SinkError};
    use logbridge_domain::{Severity, ThrownError};

    fn crash_only_config() -> FileConfig {
        let mut config = FileConfig::default();
        config.tracing.enabled = false;
        config
    }

    #[test]
    fn test_default_config_registers_both_writers() {
        let sink = Arc::new(RecordingCrashSink::new());
        let logger = build_logger(&FileConfig::default(), sink).unwrap();
        assert_eq!(logger.writer_count(), 2);
    }

    #[test]
    fn test_crash_bridge_wired_to_sink() {
        let mut config = crash_only_config();
        config.logger.default_tag = Some("sys".to_string());
        let sink = Arc::new(RecordingCrashSink::new());
        let logger = build_logger(&config, sink.clone()).unwrap();

        logger.info("boot").unwrap();
        logger
            .log(
                Severity::Error,
                "crash",
                None,
                Some(Arc::new(ThrownError::new("Boom").with_return_addresses([1, 2]))),
            )
            .unwrap();

        assert_eq!(sink.breadcrumbs(), vec!["sys : boot", "sys : crash"]);
        assert_eq!(sink.reports().len(), 1);
        assert_eq!(sink.reports()[0].call_stack_return_addresses(), &[1, 2]);
    }

    #[test]
    fn test_logger_floor_applies_before_bridge() {
        let mut config = crash_only_config();
        config.logger.min_severity = Severity::Error;
        let sink = Arc::new(RecordingCrashSink::new());
        let logger = build_logger(&config, sink.clone()).unwrap();

        logger.warn("filtered").unwrap();

        assert!(sink.breadcrumbs().is_empty());
    }

    #[test]
    fn test_disabled_writers() {
        let mut config = crash_only_config();
        config.crash.enabled = false;
        let logger = build_logger(&config, Arc::new(RecordingCrashSink::new())).unwrap();
        assert_eq!(logger.writer_count(), 0);
    }

    #[test]
    fn test_inverted_thresholds_fail() {
        let mut config = crash_only_config();
        config.crash.min_severity = Severity::Assert;
        config.crash.min_crash_severity = Severity::Error;

        let result = build_logger(&config, Arc::new(RecordingCrashSink::new()));

        assert!(matches!(
            result,
            Err(ConfigValidationError::InvalidCrashThresholds(_))
        ));
    }

    #[test]
    fn test_failing_bridge_does_not_starve_later_writers() {
        let mut config = crash_only_config();
        config.logger.default_tag = Some("sys".to_string());
        let sink = Arc::new(RecordingCrashSink::failing(SinkError::Unavailable(
            "down".to_string(),
        )));
        let capture = Arc::new(CapturingWriter::new());
        let logger = build_logger(&config, sink)
            .unwrap()
            .with_writer(capture.clone());

        let result = logger.info("hello");

        assert_eq!(
            result,
            Err(LogError::Sink(SinkError::Unavailable("down".to_string())))
        );
        assert_eq!(capture.count(), 1);
        assert_eq!(capture.last().unwrap().message(), "hello");
    }
}

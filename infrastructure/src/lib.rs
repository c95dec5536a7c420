//! Infrastructure layer for logbridge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod crash;
pub mod factory;
pub mod writers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileCrashConfig, FileLoggerConfig,
    FileTracingConfig,
};
pub use crash::{RecordingCrashSink, SinkCall, TracingCrashSink};
pub use factory::build_logger;
pub use writers::{CapturingWriter, CrashBridgeWriter, TracingWriter};

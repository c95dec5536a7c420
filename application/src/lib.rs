//! Application layer for logbridge
//!
//! This crate contains the [`Logger`] façade and the port definitions its
//! adapters implement. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use ports::{
    crash_sink::{CrashReportingSink, SinkError},
    log_writer::{LogError, LogWriter, NoLogWriter},
};
pub use use_cases::logger::Logger;

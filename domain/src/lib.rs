//! Domain layer for logbridge
//!
//! This crate contains the value objects shared by every layer. It has no
//! dependencies on infrastructure or sink concerns.
//!
//! # Core Concepts
//!
//! ## Severity gating
//!
//! Every event carries a [`Severity`]. Loggers and writers hold floors and
//! accept an event only when `severity >= floor`.
//!
//! ## Crash bridging
//!
//! Events may carry a [`ThrownError`]. A crash-bridging writer turns severe
//! events with an error into a [`CrashReport`] via [`extract`].

pub mod core;
pub mod crash;
pub mod logging;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use crash::{
    extract::{ExtractedException, extract},
    report::CrashReport,
    thresholds::CrashThresholds,
    thrown::ThrownError,
};
pub use logging::{event::LogEvent, severity::Severity};

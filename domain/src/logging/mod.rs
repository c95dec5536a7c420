//! Logging value objects.
//!
//! - [`severity::Severity`] — ordered urgency scale used for every filter
//! - [`event::LogEvent`] — one logged event as seen by writers

pub mod event;
pub mod severity;

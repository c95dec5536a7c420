//! Use cases (application services)

pub mod logger;

//! Shared utilities for the SEBA dashboard
//!
//! Logging setup and its configuration, used by the dashboard binary.

pub mod config;
pub mod logging;

pub use config::{LogConfig, LogFormat};
pub use logging::init_tracing;

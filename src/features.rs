//! Feature modules
//!
//! Host-facing configuration for the progress bar.

pub mod config;

pub use config::{ConfigError, ProgressConfig};

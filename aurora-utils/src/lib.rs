//! Common utilities for the AURORA session core
//!
//! Provides the unified error type, logging setup, and platform
//! directory resolution shared by all aurora crates.

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{AuroraError, Result};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogOutput};

//! Error types for aurora
//!
//! Provides a unified error type used across all aurora crates.

use std::path::PathBuf;

/// Main error type for aurora operations
#[derive(Debug, thiserror::Error)]
pub enum AuroraError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Session Errors ===

    #[error("Pane not found: {0}")]
    PaneNotFound(u64),

    #[error("Tab not found in pane {pane_id}: {path}")]
    TabNotFound { pane_id: u64, path: String },

    #[error("Maximum number of panes reached")]
    MaxPanesReached,

    #[error("No active tab to split from")]
    NoActiveTab,

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuroraError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if this error is an expected, user-facing condition
    ///
    /// User-facing errors are surfaced as status messages (disabled
    /// buttons, "save failed" toasts). Everything else signals a defect
    /// in a caller and is only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::MaxPanesReached
                | Self::NoActiveTab
        )
    }
}

/// Result type alias using AuroraError
pub type Result<T> = std::result::Result<T, AuroraError>;

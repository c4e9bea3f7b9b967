//! Local filesystem backend for the aurora session core
//!
//! Implements the [`FileAccess`] collaborator over `tokio::fs`. Single
//! shot, no retry: failures carry the path and are surfaced to the user
//! by the workbench.

use std::path::Path;

use tracing::debug;

use aurora_session::FileAccess;
use aurora_utils::{AuroraError, Result};

/// File access over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl LocalFiles {
    /// Create a local filesystem backend
    pub fn new() -> Self {
        Self
    }
}

impl FileAccess for LocalFiles {
    async fn read(&self, path: &str) -> Result<String> {
        debug!(path, "Reading file");
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AuroraError::FileRead {
                path: path.into(),
                source: e,
            })
    }

    async fn write(&self, path: &str, content: &str) -> Result<()> {
        debug!(path, bytes = content.len(), "Writing file");
        tokio::fs::write(path, content)
            .await
            .map_err(|e| AuroraError::FileWrite {
                path: path.into(),
                source: e,
            })
    }
}

/// Derive a tab label from a path
///
/// The final path component, or the path itself when there is none
/// (e.g. a bare drive root).
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

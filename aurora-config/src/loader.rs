//! Settings file loading and saving

use std::path::Path;

use tracing::{debug, warn};

use aurora_utils::{paths, AuroraError, Result};

use crate::schema::EditorSettings;

/// Load settings from the default location
///
/// A missing file yields defaults; a malformed file is an error so the
/// caller can surface it instead of silently discarding user settings.
pub fn load_settings() -> Result<EditorSettings> {
    load_settings_from(paths::settings_file())
}

/// Load settings from a specific path
pub fn load_settings_from(path: impl AsRef<Path>) -> Result<EditorSettings> {
    let path = path.as_ref();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(EditorSettings::default());
        }
        Err(e) => {
            return Err(AuroraError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    serde_json::from_str(&raw).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Malformed settings file");
        AuroraError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })
}

/// Save settings to the default location
pub fn save_settings(settings: &EditorSettings) -> Result<()> {
    save_settings_to(settings, paths::settings_file())
}

/// Save settings to a specific path, creating parent directories
pub fn save_settings_to(settings: &EditorSettings, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AuroraError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| AuroraError::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(path, json).map_err(|e| AuroraError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), "Settings saved");
    Ok(())
}

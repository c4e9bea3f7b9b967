//! Path utilities for aurora
//!
//! Resolves the XDG Base Directory locations used for settings and
//! log files.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Application identifier for XDG directories
const APP_NAME: &str = "aurora";

/// Get project directories
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the configuration directory
///
/// Location: `$XDG_CONFIG_HOME/aurora` or `~/.config/aurora`
pub fn config_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback(".config"))
}

/// Get the settings file path
///
/// Location: `$XDG_CONFIG_HOME/aurora/settings.json`
pub fn settings_file() -> PathBuf {
    config_dir().join("settings.json")
}

/// Get the state directory (persistent state like window layout)
///
/// Location: `$XDG_STATE_HOME/aurora` or `~/.local/state/aurora`
pub fn state_dir() -> PathBuf {
    project_dirs()
        .and_then(|p| p.state_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| home_fallback(".local/state"))
}

/// Get the log directory
///
/// Location: `<state dir>/logs`
pub fn log_dir() -> PathBuf {
    state_dir().join("logs")
}

fn home_fallback(subdir: &str) -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(subdir).join(APP_NAME)
}

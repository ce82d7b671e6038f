//! Platform-specific directory utilities.

use std::path::PathBuf;

const APP_NAME: &str = "condition-tracker";

/// Log directory.
///
/// - macOS: `~/Library/Caches/condition-tracker/logs`
/// - Linux: `~/.cache/condition-tracker/logs` (or `$XDG_CACHE_HOME/...`)
/// - Windows: `%LOCALAPPDATA%\condition-tracker\logs`
/// - Fallback: `/tmp/condition-tracker/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME))
        .join("logs")
}

/// Data directory holding one sub-directory of state per session.
///
/// - macOS: `~/Library/Application Support/condition-tracker`
/// - Linux: `~/.local/share/condition-tracker` (or `$XDG_DATA_HOME/...`)
/// - Windows: `%APPDATA%\condition-tracker`
/// - Fallback: `./tracker_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./tracker_data"))
}

//! Platform-specific paths for the settings file.
//!
//! - Linux: `~/.config/retarget/config.toml`
//! - macOS: `~/Library/Application Support/retarget/config.toml`
//! - Windows: `%APPDATA%\retarget\config.toml`
//!
//! # Example
//!
//! ```rust,no_run
//! use retarget_config::paths;
//!
//! println!("Settings: {}", paths::default_config_path().display());
//! ```

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "retarget";

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the default settings file.
pub fn default_config_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE_NAME)
}

/// Ensure the user config directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// Resolve `path` against `base` unless it is already absolute.
///
/// Paths named inside a settings file are relative to that file's directory.
pub fn resolve_relative(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use retarget_config::{Settings, default_config_path};
use retarget_core::naming::UNKNOWN_DEVICE;
use retarget_core::{Curve, Diagnostics, device_name_from_file_name};
use std::path::{Path, PathBuf};

/// Load the effective settings.
///
/// An explicit `--config` file must exist. Without one, the user settings
/// file is used if present and the defaults otherwise. Also returns the
/// directory relative paths inside the settings are resolved against.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<(Settings, Option<PathBuf>)> {
    let (settings, path) = match explicit {
        Some(path) => (Settings::load(path)?, path.to_path_buf()),
        None => {
            let path = default_config_path();
            (Settings::load_or_default(&path)?, path)
        }
    };
    let base_dir = path.parent().map(Path::to_path_buf);
    Ok((settings, base_dir))
}

/// Read and parse a GraphicEQ file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_curve(path: &Path) -> anyhow::Result<(Curve, Diagnostics)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    retarget_core::parse(&text).with_context(|| format!("failed to parse '{}'", path.display()))
}

/// Device name derived from the file name part of `path`.
pub fn device_name_for(path: &Path) -> String {
    path.file_name()
        .map(|name| device_name_from_file_name(&name.to_string_lossy()))
        .unwrap_or_else(|| UNKNOWN_DEVICE.to_string())
}

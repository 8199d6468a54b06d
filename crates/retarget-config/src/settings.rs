//! Settings file format and operations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use retarget_core::{
    ControlPoint, DEFAULT_START_FREQ_HZ, DEFAULT_WINDOW_SIZE, OutputNaming, OverlayCurve,
    Pipeline, PipelineError, SmoothingConfig, builtin, naming, parse_graphic_eq,
};

use crate::error::ConfigError;
use crate::paths::resolve_relative;
use crate::validation::validate_settings;

/// Converter settings.
///
/// Every field has a default, so an empty file is a valid settings file.
///
/// # TOML Format
///
/// ```toml
/// correction_file = "my_correction.txt"
///
/// [smoothing]
/// window_size = 5
/// start_freq_hz = 8000.0
///
/// [naming]
/// primary = "{device}_AHTVC-By_MiFun.txt"
/// secondary = "{device}_AHTVCLr2-By_MiFun.txt"
///
/// [[overlay]]
/// freq = 62
/// gain = 1.6
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// GraphicEQ file replacing the built-in correction curve.
    ///
    /// Relative paths are resolved against the settings file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction_file: Option<PathBuf>,

    /// Moving-average parameters.
    pub smoothing: SmoothingSettings,

    /// Output file name templates.
    pub naming: NamingSettings,

    /// Control points replacing the built-in overlay curve.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overlay: Vec<ControlPoint>,
}

/// `[smoothing]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SmoothingSettings {
    /// Moving-average window in axis points.
    pub window_size: usize,
    /// Lower edge of the smoothed band in Hz.
    pub start_freq_hz: f64,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            start_freq_hz: DEFAULT_START_FREQ_HZ,
        }
    }
}

/// `[naming]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NamingSettings {
    /// Template for the primary output file name.
    pub primary: String,
    /// Template for the secondary output file name.
    pub secondary: String,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            primary: naming::DEFAULT_PRIMARY_TEMPLATE.to_string(),
            secondary: naming::DEFAULT_SECONDARY_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let settings: Settings = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from `path`, falling back to the defaults when the file
    /// does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Smoothing parameters for the pipeline.
    pub fn smoothing_config(&self) -> SmoothingConfig {
        SmoothingConfig::new(self.smoothing.window_size, self.smoothing.start_freq_hz)
    }

    /// Output file name templates.
    pub fn output_naming(&self) -> OutputNaming {
        OutputNaming::new(&self.naming.primary, &self.naming.secondary)
    }

    /// Validate the settings and build a pipeline from them.
    ///
    /// `base_dir` is the directory relative `correction_file` paths are
    /// resolved against, normally the settings file's parent.
    pub fn to_pipeline(&self, base_dir: Option<&Path>) -> Result<Pipeline, ConfigError> {
        validate_settings(self)?;

        let correction = match &self.correction_file {
            Some(file) => {
                let path = resolve_relative(base_dir, file);
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| ConfigError::read_file(&path, e))?;
                let mut diagnostics = retarget_core::Diagnostics::new();
                let curve = parse_graphic_eq(&text, &mut diagnostics)
                    .map_err(|e| ConfigError::correction(&path, e))?;
                tracing::info!(
                    path = %path.display(),
                    points = curve.len(),
                    warnings = diagnostics.len(),
                    "loaded correction curve"
                );
                curve
            }
            None => builtin::harman_to_vdsf().map_err(PipelineError::from)?,
        };

        let overlay = if self.overlay.is_empty() {
            builtin::wavelet_overlay().map_err(PipelineError::from)?
        } else {
            OverlayCurve::new(self.overlay.iter().copied()).map_err(PipelineError::from)?
        };

        Ok(Pipeline::new(correction, overlay, self.smoothing_config()))
    }
}

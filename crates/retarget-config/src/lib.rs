//! Settings management for the retarget EQ converter.
//!
//! # Features
//!
//! - **Settings file**: smoothing parameters, output naming templates and
//!   optional replacements for the built-in curves, stored as TOML
//! - **Validation**: start frequency, naming templates and overlay points
//! - **Paths**: platform-specific config directory
//!
//! # Example
//!
//! ```rust,no_run
//! use retarget_config::{Settings, paths};
//!
//! let path = paths::default_config_path();
//! let settings = Settings::load_or_default(&path).unwrap();
//! let pipeline = settings.to_pipeline(path.parent()).unwrap();
//! ```

mod error;
mod settings;

/// Platform-specific paths for the settings file.
pub mod paths;

/// Settings validation.
pub mod validation;

pub use error::ConfigError;
pub use paths::{CONFIG_FILE_NAME, default_config_path, ensure_user_config_dir, user_config_dir};
pub use settings::{NamingSettings, Settings, SmoothingSettings};
pub use validation::{
    ValidationError, ValidationResult, validate_settings, validate_start_freq, validate_template,
};

//! Settings validation.
//!
//! Checks run before a pipeline is built from [`Settings`]. Every problem is
//! collected so a user fixing the file sees all of them at once.
//!
//! # Example
//!
//! ```rust
//! use retarget_config::{Settings, validate_settings};
//!
//! let mut settings = Settings::default();
//! assert!(validate_settings(&settings).is_ok());
//!
//! settings.naming.primary = "fixed.txt".to_string();
//! assert!(validate_settings(&settings).is_err());
//! ```

use retarget_core::naming::DEVICE_PLACEHOLDER;
use retarget_core::{OverlayCurve, OverlayError};
use thiserror::Error;

use crate::settings::Settings;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Smoothing start frequency is not a positive finite number.
    #[error("smoothing start frequency {value} must be a positive finite number of Hz")]
    InvalidStartFrequency {
        /// The rejected value.
        value: f64,
    },

    /// A naming template has no `{device}` placeholder.
    #[error("naming template '{field}' = \"{template}\" must contain {{device}}")]
    MissingPlaceholder {
        /// Settings key of the template.
        field: &'static str,
        /// The template text.
        template: String,
    },

    /// A naming template would write outside the output directory.
    #[error("naming template '{field}' = \"{template}\" must be a file name, not a path")]
    PathInTemplate {
        /// Settings key of the template.
        field: &'static str,
        /// The template text.
        template: String,
    },

    /// The replacement overlay points are not a valid overlay curve.
    #[error("overlay: {0}")]
    Overlay(OverlayError),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a naming template.
pub fn validate_template(field: &'static str, template: &str) -> ValidationResult<()> {
    if !template.contains(DEVICE_PLACEHOLDER) {
        return Err(ValidationError::MissingPlaceholder {
            field,
            template: template.to_string(),
        });
    }
    if template.contains(['/', '\\']) {
        return Err(ValidationError::PathInTemplate {
            field,
            template: template.to_string(),
        });
    }
    Ok(())
}

/// Validate the smoothing start frequency.
pub fn validate_start_freq(value: f64) -> ValidationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidStartFrequency { value })
    }
}

/// Validate a whole settings file.
///
/// The smoothing window is not checked here. An even or too-small window is
/// reported as a warning when the smoother runs.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_start_freq(settings.smoothing.start_freq_hz) {
        errors.push(e);
    }
    if let Err(e) = validate_template("naming.primary", &settings.naming.primary) {
        errors.push(e);
    }
    if let Err(e) = validate_template("naming.secondary", &settings.naming.secondary) {
        errors.push(e);
    }
    if !settings.overlay.is_empty()
        && let Err(e) = OverlayCurve::new(settings.overlay.iter().copied())
    {
        errors.push(ValidationError::Overlay(e));
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

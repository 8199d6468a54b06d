//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

use retarget_core::{ParseError, PipelineError};

/// Errors that can occur while loading, saving or applying settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Validation errors
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// The replacement correction file is not a usable GraphicEQ curve.
    #[error("correction file '{path}' is invalid: {source}")]
    Correction {
        /// Path of the correction file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: ParseError,
    },

    /// A built-in curve failed to load.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a correction file error.
    pub fn correction(path: impl Into<PathBuf>, source: ParseError) -> Self {
        ConfigError::Correction {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = ConfigError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
    }

    #[test]
    fn correction_factory_produces_correct_variant() {
        let err = ConfigError::correction("/curves/c.txt", ParseError::MissingMarker);
        assert!(matches!(
            err,
            ConfigError::Correction {
                source: ParseError::MissingMarker,
                ..
            }
        ));
    }

    #[test]
    fn io_variants_display_path() {
        let cases = [
            (ConfigError::read_file("/a/b.toml", mock_io_err()), "failed to read file"),
            (ConfigError::write_file("/a/b.toml", mock_io_err()), "failed to write file"),
            (ConfigError::create_dir("/a/b.toml", mock_io_err()), "failed to create directory"),
        ];
        for (err, prefix) in cases {
            let msg = err.to_string();
            assert!(msg.contains(prefix), "got: {msg}");
            assert!(msg.contains("/a/b.toml"), "got: {msg}");
            assert!(err.source().is_some(), "{prefix} must expose I/O source");
        }
    }

    #[test]
    fn correction_display_and_source() {
        let err = ConfigError::correction("c.txt", ParseError::NoValidPoints { line: 3 });
        let msg = err.to_string();
        assert!(msg.contains("correction file 'c.txt'"), "got: {msg}");
        assert!(msg.contains("line 3"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn pipeline_error_is_transparent() {
        let inner = PipelineError::Correction(ParseError::MissingMarker);
        let expected = inner.to_string();
        let err = ConfigError::from(inner);
        assert_eq!(err.to_string(), expected);
    }
}

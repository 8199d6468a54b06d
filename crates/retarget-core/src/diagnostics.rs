//! Soft-recovery warnings collected while a curve moves through the pipeline.
//!
//! Numeric guards never abort processing. Each one replaces or drops a single
//! value and records a [`Warning`] in a [`Diagnostics`] collector that the
//! caller passes down. Every recorded warning is also emitted as a
//! `tracing::warn!` event.

use thiserror::Error;

/// Pipeline stage that emitted a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    /// Text parsing.
    Parse,
    /// Overlay interpolation.
    Overlay,
    /// Band-limited smoothing.
    Smooth,
    /// No-preamp normalization.
    Normalize,
    /// Serialization back to text.
    Format,
}

/// A recoverable problem with a single value.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Warning {
    /// An empty point between two separators.
    #[error("line {line}: empty EQ point at index {index}")]
    EmptyToken {
        /// 1-based line number.
        line: usize,
        /// Position of the token on the line.
        index: usize,
    },

    /// A point that is not exactly `<freq> <gain>`.
    #[error("line {line}: ignoring malformed point with {fields} field(s): '{token}'")]
    MalformedToken {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },

    /// A point whose frequency or gain is not a number.
    #[error("line {line}: ignoring unparsable point '{token}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A NaN or infinite gain in the input.
    #[error("line {line}: ignoring non-finite gain at {freq} Hz")]
    NonFiniteGain {
        /// 1-based line number.
        line: usize,
        /// Frequency of the point.
        freq: i64,
    },

    /// A frequency outside the accepted range.
    #[error("line {line}: ignoring out-of-range frequency {freq} Hz")]
    FrequencyOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The rejected frequency.
        freq: i64,
    },

    /// Bracketing overlay points too close in log-frequency to interpolate.
    #[error("degenerate overlay span between {lower} Hz and {upper} Hz, using lower gain")]
    DegenerateSpan {
        /// Lower bracketing frequency.
        lower: u32,
        /// Upper bracketing frequency.
        upper: u32,
    },

    /// Adding the overlay produced a non-finite gain.
    #[error("overlay produced a non-finite gain at {freq} Hz, keeping previous value")]
    NonFiniteOverlaySum {
        /// Affected frequency.
        freq: u32,
    },

    /// Smoothing window is not an odd number greater than 1.
    #[error("moving-average window {window} must be an odd number greater than 1, skipping smoothing")]
    InvalidWindow {
        /// The configured window size.
        window: usize,
    },

    /// No axis frequency at or above the smoothing start.
    #[error("no points at or above {start_freq} Hz, skipping smoothing")]
    NoPointsAboveStart {
        /// Configured start frequency.
        start_freq: f64,
    },

    /// Too few points above the smoothing start for one full window.
    #[error("{available} point(s) at or above {start_freq} Hz is fewer than window {window}, skipping smoothing")]
    InsufficientPoints {
        /// Points available from the start index.
        available: usize,
        /// The configured window size.
        window: usize,
        /// Configured start frequency.
        start_freq: f64,
    },

    /// A non-finite value inside a smoothing window was skipped.
    #[error("non-finite value at axis index {index} skipped while smoothing")]
    NonFiniteWindowValue {
        /// Axis index of the skipped value.
        index: usize,
    },

    /// A smoothing window held no finite values.
    #[error("no finite values in window at axis index {index}, keeping original value")]
    EmptyWindow {
        /// Axis index of the window centre.
        index: usize,
    },

    /// A window average came out non-finite.
    #[error("non-finite average at axis index {index}, keeping original value")]
    NonFiniteAverage {
        /// Axis index of the window centre.
        index: usize,
    },

    /// Normalizer found no entries on the axis.
    #[error("no EQ data to normalize")]
    NothingToNormalize,

    /// A non-finite gain was read as 0 while computing the maximum.
    #[error("non-finite gain at {freq} Hz treated as 0.0 before normalizing")]
    NonFiniteNormalizeInput {
        /// Affected frequency.
        freq: u32,
    },

    /// Shifting a gain produced a non-finite value.
    #[error("normalizing produced a non-finite gain at {freq} Hz, replaced with 0.0")]
    NonFiniteShiftResult {
        /// Affected frequency.
        freq: u32,
    },

    /// A non-finite gain reached the serializer.
    #[error("non-finite gain at {freq} Hz replaced with 0.0 while formatting")]
    NonFiniteFormatGain {
        /// Affected frequency.
        freq: u32,
    },
}

impl Warning {
    /// The stage that produces this kind of warning.
    pub fn stage(&self) -> Stage {
        match self {
            Warning::EmptyToken { .. }
            | Warning::MalformedToken { .. }
            | Warning::InvalidNumber { .. }
            | Warning::NonFiniteGain { .. }
            | Warning::FrequencyOutOfRange { .. } => Stage::Parse,
            Warning::DegenerateSpan { .. } | Warning::NonFiniteOverlaySum { .. } => Stage::Overlay,
            Warning::InvalidWindow { .. }
            | Warning::NoPointsAboveStart { .. }
            | Warning::InsufficientPoints { .. }
            | Warning::NonFiniteWindowValue { .. }
            | Warning::EmptyWindow { .. }
            | Warning::NonFiniteAverage { .. } => Stage::Smooth,
            Warning::NothingToNormalize
            | Warning::NonFiniteNormalizeInput { .. }
            | Warning::NonFiniteShiftResult { .. } => Stage::Normalize,
            Warning::NonFiniteFormatGain { .. } => Stage::Format,
        }
    }
}

/// Ordered collection of warnings from one pipeline invocation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and emit it as a tracing event.
    pub fn push(&mut self, warning: Warning) {
        tracing::warn!(stage = ?warning.stage(), "{warning}");
        self.warnings.push(warning);
    }

    /// Move every warning from `other` into this collector.
    ///
    /// The moved warnings were already emitted when first recorded and are
    /// not logged again.
    pub fn append(&mut self, other: &mut Diagnostics) {
        self.warnings.append(&mut other.warnings);
    }

    /// Number of recorded warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of warnings emitted by `stage`.
    pub fn count(&self, stage: Stage) -> usize {
        self.warnings.iter().filter(|w| w.stage() == stage).count()
    }

    /// Iterate in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.warnings.iter()
    }

    /// The warnings as a slice.
    pub fn as_slice(&self) -> &[Warning] {
        &self.warnings
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.iter()
    }
}

//! Sparse overlay curves evaluated by log-frequency interpolation.
//!
//! An [`OverlayCurve`] is a handful of control points (for example a
//! nine-band tonal tweak) that has to be applied to a dense GraphicEQ curve.
//! Between control points the gain is interpolated linearly in
//! `log10(frequency)`. Outside the covered range the nearest end point's gain
//! is held flat.

use thiserror::Error;

use crate::curve::{Curve, FrequencyAxis, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
use crate::diagnostics::{Diagnostics, Warning};

/// Log-frequency spans narrower than this fall back to the lower point's gain.
pub const DEGENERATE_LOG_SPAN: f64 = 1e-9;

/// One `(frequency, gain)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint {
    /// Frequency in Hz.
    pub freq: u32,
    /// Gain in dB.
    pub gain: f64,
}

impl ControlPoint {
    /// Create a control point.
    pub const fn new(freq: u32, gain: f64) -> Self {
        Self { freq, gain }
    }
}

/// Reasons an overlay curve cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// No control points were given.
    #[error("overlay curve needs at least one control point")]
    Empty,

    /// Two control points share a frequency.
    #[error("overlay curve has more than one control point at {freq} Hz")]
    DuplicateFrequency {
        /// The repeated frequency.
        freq: u32,
    },

    /// A control point lies outside the accepted frequency range.
    #[error("overlay control point at {freq} Hz is outside 1..=30000 Hz")]
    FrequencyOutOfRange {
        /// The rejected frequency.
        freq: u32,
    },

    /// A control point has a NaN or infinite gain.
    #[error("overlay control point at {freq} Hz has a non-finite gain")]
    NonFiniteGain {
        /// Frequency of the point.
        freq: u32,
    },
}

/// Immutable, ascending, non-empty list of control points.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCurve {
    points: Vec<ControlPoint>,
}

impl OverlayCurve {
    /// Build an overlay from points in any order.
    ///
    /// Points are sorted by frequency. Empty input, repeated frequencies,
    /// out-of-range frequencies and non-finite gains are rejected.
    pub fn new(points: impl IntoIterator<Item = ControlPoint>) -> Result<Self, OverlayError> {
        let mut points: Vec<ControlPoint> = points.into_iter().collect();
        if points.is_empty() {
            return Err(OverlayError::Empty);
        }

        for point in &points {
            if !(MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&point.freq) {
                return Err(OverlayError::FrequencyOutOfRange { freq: point.freq });
            }
            if !point.gain.is_finite() {
                return Err(OverlayError::NonFiniteGain { freq: point.freq });
            }
        }

        points.sort_by_key(|p| p.freq);
        if let Some(pair) = points.windows(2).find(|w| w[0].freq == w[1].freq) {
            return Err(OverlayError::DuplicateFrequency { freq: pair[0].freq });
        }

        Ok(Self { points })
    }

    /// Build an overlay from `(freq, gain)` pairs.
    pub fn from_pairs(pairs: &[(u32, f64)]) -> Result<Self, OverlayError> {
        Self::new(pairs.iter().map(|&(freq, gain)| ControlPoint::new(freq, gain)))
    }

    /// Control points in ascending frequency order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of control points (always at least one).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The control points as a curve keyed by frequency.
    pub fn to_curve(&self) -> Curve {
        self.points.iter().map(|p| (p.freq, p.gain)).collect()
    }

    /// Overlay gain at `freq`.
    ///
    /// - below the first point: the first point's gain
    /// - above the last point: the last point's gain
    /// - on a control point: that point's gain exactly
    /// - otherwise: linear interpolation in `log10(freq)` between the
    ///   bracketing pair
    pub fn gain_at(&self, freq: u32, diagnostics: &mut Diagnostics) -> f64 {
        let index = match self.points.binary_search_by_key(&freq, |p| p.freq) {
            Ok(exact) => return self.points[exact].gain,
            Err(insert_at) => insert_at,
        };

        if index == 0 {
            return self.points[0].gain;
        }
        if index == self.points.len() {
            return self.points[index - 1].gain;
        }

        let lower = self.points[index - 1];
        let upper = self.points[index];
        let log_lower = f64::from(lower.freq).log10();
        let log_upper = f64::from(upper.freq).log10();
        let span = log_upper - log_lower;

        // Unreachable through `OverlayCurve::new`: frequencies are distinct
        // integers, so adjacent points are at least ~1.4e-5 apart in log10.
        if span < DEGENERATE_LOG_SPAN {
            diagnostics.push(Warning::DegenerateSpan {
                lower: lower.freq,
                upper: upper.freq,
            });
            return lower.gain;
        }

        let t = (f64::from(freq).log10() - log_lower) / span;
        lower.gain + t * (upper.gain - lower.gain)
    }
}

/// Add `overlay` to every axis frequency present in `base`.
///
/// Frequencies absent from `base` are left out; the overlay never introduces
/// new keys. A non-finite sum keeps the base value for that frequency.
pub fn apply_overlay(
    base: &Curve,
    axis: &FrequencyAxis,
    overlay: &OverlayCurve,
    diagnostics: &mut Diagnostics,
) -> Curve {
    let mut result = base.clone();

    for freq in axis {
        let Some(base_gain) = base.get(freq) else {
            continue;
        };
        let sum = base_gain + overlay.gain_at(freq, diagnostics);
        if sum.is_finite() {
            result.insert(freq, sum);
        } else {
            diagnostics.push(Warning::NonFiniteOverlaySum { freq });
        }
    }

    tracing::debug!(points = overlay.len(), "applied overlay curve");
    result
}

//! Band-limited moving-average smoothing.
//!
//! The average runs in axis-index space, not in Hz, and only over the part of
//! the axis at or above a start frequency. Only positions with a full window
//! on both sides are rewritten; the first and last `window_size / 2`
//! positions of the eligible region keep their original values.

use crate::curve::{Curve, FrequencyAxis};
use crate::diagnostics::{Diagnostics, Warning};

/// Default moving-average window, in axis points.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Default lower edge of the smoothed band, in Hz.
pub const DEFAULT_START_FREQ_HZ: f64 = 8000.0;

/// Moving-average parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothingConfig {
    /// Number of axis points averaged per output point. Must be odd and > 1.
    pub window_size: usize,
    /// Axis points below this frequency are never rewritten.
    pub start_freq: f64,
}

impl SmoothingConfig {
    /// Create a smoothing configuration.
    pub const fn new(window_size: usize, start_freq: f64) -> Self {
        Self {
            window_size,
            start_freq,
        }
    }

    /// Whether `window_size` is odd and greater than 1.
    pub fn has_valid_window(&self) -> bool {
        self.window_size > 1 && self.window_size % 2 == 1
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, DEFAULT_START_FREQ_HZ)
    }
}

/// Smooth `curve` along `axis` from `config.start_freq` upward.
///
/// Returns the input unchanged (with a warning) when the window is invalid,
/// when no axis frequency reaches the start, or when fewer than
/// `window_size` points lie at or above it.
pub fn smooth(
    curve: &Curve,
    axis: &FrequencyAxis,
    config: &SmoothingConfig,
    diagnostics: &mut Diagnostics,
) -> Curve {
    let window = config.window_size;
    if !config.has_valid_window() {
        diagnostics.push(Warning::InvalidWindow { window });
        return curve.clone();
    }

    let Some(start_index) = axis.first_at_or_above(config.start_freq) else {
        diagnostics.push(Warning::NoPointsAboveStart {
            start_freq: config.start_freq,
        });
        return curve.clone();
    };

    let available = axis.len() - start_index;
    if available < window {
        diagnostics.push(Warning::InsufficientPoints {
            available,
            window,
            start_freq: config.start_freq,
        });
        return curve.clone();
    }

    let gains: Vec<f64> = axis.iter().map(|freq| curve.get_or_zero(freq)).collect();
    let half = window / 2;
    let mut smoothed = gains.clone();

    for i in (start_index + half)..(gains.len() - half) {
        let first = i - half;
        let mut sum = 0.0;
        let mut count = 0usize;

        for (offset, &gain) in gains[first..=i + half].iter().enumerate() {
            if gain.is_finite() {
                sum += gain;
                count += 1;
            } else {
                diagnostics.push(Warning::NonFiniteWindowValue {
                    index: first + offset,
                });
            }
        }

        if count == 0 {
            diagnostics.push(Warning::EmptyWindow { index: i });
            continue;
        }

        let average = sum / count as f64;
        if average.is_finite() {
            smoothed[i] = average;
        } else {
            diagnostics.push(Warning::NonFiniteAverage { index: i });
        }
    }

    tracing::debug!(
        start_freq = config.start_freq,
        window,
        smoothed_points = gains.len() - half - (start_index + half),
        "applied moving-average smoothing"
    );

    let mut output = curve.clone();
    output.extend(axis.iter().zip(smoothed));
    output
}

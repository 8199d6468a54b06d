//! No-preamp normalization.
//!
//! A boost-only filter bank clips when any band sits above 0 dB. Shifting the
//! whole curve down by its maximum gain removes the need for a preamp stage.
//! Curves already at or below 0 dB are never shifted upward.

use crate::curve::{Curve, FrequencyAxis};
use crate::diagnostics::{Diagnostics, Warning};

/// Shift every entry on `axis` down by `max(max_gain, 0)`.
///
/// Entries off the axis are dropped. Non-finite inputs count as 0 dB and
/// non-finite results are replaced with 0 dB, each with a warning. A curve
/// with no entries on the axis is returned unchanged.
pub fn remove_preamp(curve: &Curve, axis: &FrequencyAxis, diagnostics: &mut Diagnostics) -> Curve {
    let mut output = Curve::new();
    let mut max_gain = f64::NEG_INFINITY;

    for freq in axis {
        let Some(mut gain) = curve.get(freq) else {
            continue;
        };
        if !gain.is_finite() {
            diagnostics.push(Warning::NonFiniteNormalizeInput { freq });
            gain = 0.0;
        }
        output.insert(freq, gain);
        max_gain = max_gain.max(gain);
    }

    if output.is_empty() {
        diagnostics.push(Warning::NothingToNormalize);
        return curve.clone();
    }

    let shift = max_gain.max(0.0);
    tracing::debug!(max_gain, shift, "removing preamp");

    for freq in axis {
        let Some(gain) = output.get(freq) else {
            continue;
        };
        let shifted = gain - shift;
        if shifted.is_finite() {
            output.insert(freq, shifted);
        } else {
            diagnostics.push(Warning::NonFiniteShiftResult { freq });
            output.insert(freq, 0.0);
        }
    }

    output
}

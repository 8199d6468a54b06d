//! Pointwise curve addition over the union of two frequency sets.

use crate::curve::{Curve, FrequencyAxis};

/// Sum `a` and `b` at every frequency either of them defines.
///
/// Returns the merged curve together with the union axis. A frequency present
/// in only one operand contributes as if the other held 0 dB there.
pub fn merge(a: &Curve, b: &Curve) -> (Curve, FrequencyAxis) {
    let axis = FrequencyAxis::union([a, b]);
    let merged = axis
        .iter()
        .map(|freq| (freq, a.get_or_zero(freq) + b.get_or_zero(freq)))
        .collect();
    (merged, axis)
}

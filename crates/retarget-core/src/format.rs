//! Canonical GraphicEQ serialization.

use crate::curve::{Curve, FrequencyAxis};
use crate::diagnostics::{Diagnostics, Warning};
use crate::parse::GRAPHIC_EQ_MARKER;

/// Output used in place of an empty `GraphicEQ:` line.
pub const NO_VALID_POINTS: &str = "GraphicEQ: (No valid points)";

/// Render `curve` as `GraphicEQ: <freq> <gain>; ...` in axis order.
///
/// Gains are printed with one decimal. Axis frequencies missing from the curve
/// are skipped, and a non-finite gain is written as `0.0` with a warning.
pub fn format_graphic_eq(curve: &Curve, axis: &FrequencyAxis, diagnostics: &mut Diagnostics) -> String {
    let mut points = Vec::with_capacity(axis.len());

    for freq in axis {
        let Some(mut gain) = curve.get(freq) else {
            continue;
        };
        if !gain.is_finite() {
            diagnostics.push(Warning::NonFiniteFormatGain { freq });
            gain = 0.0;
        }
        points.push(format!("{freq} {gain:.1}"));
    }

    if points.is_empty() {
        return NO_VALID_POINTS.to_string();
    }

    format!("{GRAPHIC_EQ_MARKER} {}", points.join("; "))
}

/// Render a curve along its own frequencies.
pub fn format_curve(curve: &Curve, diagnostics: &mut Diagnostics) -> String {
    format_graphic_eq(curve, &curve.axis(), diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascending_with_one_decimal() {
        let curve = Curve::from([(1000, -2.04), (20, 1.26), (100, 0.0)]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(
            format_curve(&curve, &mut diagnostics),
            "GraphicEQ: 20 1.3; 100 0.0; 1000 -2.0"
        );
    }

    #[test]
    fn skips_axis_frequencies_without_entries() {
        let curve = Curve::from([(100, 1.0), (300, 3.0)]);
        let axis = FrequencyAxis::from_frequencies([100, 200, 300]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(
            format_graphic_eq(&curve, &axis, &mut diagnostics),
            "GraphicEQ: 100 1.0; 300 3.0"
        );
    }

    #[test]
    fn non_finite_gain_is_written_as_zero() {
        let curve = Curve::from([(100, f64::NAN), (200, f64::NEG_INFINITY)]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(
            format_curve(&curve, &mut diagnostics),
            "GraphicEQ: 100 0.0; 200 0.0"
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn empty_curve_uses_placeholder() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(format_curve(&Curve::new(), &mut diagnostics), NO_VALID_POINTS);

        let axis = FrequencyAxis::from_frequencies([100]);
        assert_eq!(
            format_graphic_eq(&Curve::new(), &axis, &mut diagnostics),
            NO_VALID_POINTS
        );
        assert!(diagnostics.is_empty());
    }
}

//! Built-in correction and overlay curves.
//!
//! These are the fixed inputs of the standard pipeline. They are plain data,
//! parsed on demand and owned by whichever [`Pipeline`](crate::Pipeline)
//! is built from them.

use crate::curve::Curve;
use crate::diagnostics::Diagnostics;
use crate::overlay::{ControlPoint, OverlayCurve, OverlayError};
use crate::parse::{ParseError, parse_graphic_eq};

/// Harman target → VDSF target correction, in GraphicEQ format.
pub const HARMAN_TO_VDSF: &str = "GraphicEQ: 20 -0.7; 21 -0.8; 22 -0.9; 23 -1.0; 24 -1.1; 26 -1.2; 27 -1.3; 29 -1.3; 30 -1.4; 32 -1.4; 34 -1.4; 36 -1.3; 38 -1.2; 40 -1.1; 43 -1.0; 45 -0.9; 48 -0.8; 50 -0.7; 53 -0.6; 56 -0.3; 59 -0.2; 63 -0.0; 66 0.2; 70 0.3; 74 0.5; 78 0.8; 83 1.0; 87 1.2; 92 1.4; 97 1.7; 103 1.9; 109 2.3; 115 2.6; 121 2.7; 128 3.0; 136 3.3; 143 3.5; 151 3.7; 160 3.8; 169 4.0; 178 4.0; 188 4.1; 199 4.1; 210 4.2; 222 4.3; 235 4.4; 248 4.5; 262 4.6; 277 4.7; 292 4.7; 309 4.8; 326 4.7; 345 4.7; 364 4.7; 385 4.7; 406 4.7; 429 4.7; 453 4.7; 479 4.8; 506 4.9; 534 4.9; 565 5.0; 596 5.0; 630 5.0; 665 5.1; 703 5.0; 743 5.0; 784 4.9; 829 4.8; 875 4.7; 924 4.6; 977 4.6; 1032 4.5; 1090 4.3; 1151 4.3; 1216 4.2; 1284 4.1; 1357 4.1; 1433 4.0; 1514 3.9; 1599 3.9; 1689 3.9; 1784 3.8; 1885 3.7; 1991 3.7; 2103 3.6; 2221 3.5; 2347 3.5; 2479 3.4; 2618 3.4; 2766 3.2; 2921 3.2; 3086 3.0; 3260 2.9; 3443 2.7; 3637 2.4; 3842 2.2; 4058 1.9; 4287 1.7; 4528 1.4; 4783 1.0; 5052 0.8; 5337 0.5; 5637 0.2; 5955 0.0; 6290 -0.1; 6644 -0.2; 7018 0.0; 7414 0.1; 7831 0.5; 8272 1.2; 8738 2.7; 9230 4.2; 9749 5.4; 10298 5.3; 10878 4.4; 11490 4.0; 12137 4.2; 12821 4.7; 13543 5.3; 14305 5.5; 15110 5.1; 15961 4.6; 16860 4.2; 17809 4.0; 18812 3.9; 19871 3.9";

/// Wavelet tonal overlay: nine octave-spaced points from 62 Hz to 16 kHz.
pub const WAVELET_OVERLAY: [ControlPoint; 9] = [
    ControlPoint::new(62, 1.6),
    ControlPoint::new(125, 0.4),
    ControlPoint::new(250, -0.6),
    ControlPoint::new(500, 0.0),
    ControlPoint::new(1000, -0.4),
    ControlPoint::new(2000, -0.7),
    ControlPoint::new(4000, -0.5),
    ControlPoint::new(8000, -0.1),
    ControlPoint::new(16000, 0.3),
];

/// The Harman → VDSF correction as a curve.
pub fn harman_to_vdsf() -> Result<Curve, ParseError> {
    let mut diagnostics = Diagnostics::new();
    parse_graphic_eq(HARMAN_TO_VDSF, &mut diagnostics)
}

/// The Wavelet overlay as an [`OverlayCurve`].
pub fn wavelet_overlay() -> Result<OverlayCurve, OverlayError> {
    OverlayCurve::new(WAVELET_OVERLAY)
}

//! Retarget Core - GraphicEQ curve retargeting
//!
//! Converts AutoEQ-style GraphicEQ curves between headphone targets and emits
//! two no-preamp variants ready for a boost-free equalizer.
//!
//! # Pipeline
//!
//! ## Curves
//!
//! - [`Curve`] - Sparse frequency → gain map
//! - [`FrequencyAxis`] - Sorted, deduplicated union of curve frequencies
//!
//! ## Stages
//!
//! - [`parse_graphic_eq`] - Text → curve, skipping malformed points
//! - [`merge`] - Point-wise sum of two curves over their frequency union
//! - [`apply_overlay`] - Add a sparse [`OverlayCurve`] by log-frequency interpolation
//! - [`smooth`] - Index-windowed moving average above a start frequency
//! - [`remove_preamp`] - Shift the curve so its maximum is at most 0 dB
//! - [`format_graphic_eq`] - Curve → canonical one-decimal text
//!
//! ## Orchestration
//!
//! - [`Pipeline`] - Runs both output branches over a shared axis
//! - [`builtin`] - The Harman → VDSF correction and the Wavelet overlay
//! - [`naming`] - Device names and output file names
//!
//! # Diagnostics
//!
//! Bad values never abort a run. Each stage takes a [`Diagnostics`]
//! collector and records a [`Warning`] for every value it replaced or
//! skipped. Only the parser fails outright, with a [`ParseError`].
//!
//! # Example
//!
//! ```rust
//! use retarget_core::{Pipeline, parse};
//!
//! let (input, _) = parse("GraphicEQ: 100 3.0; 1000 3.0").unwrap();
//! let output = Pipeline::standard().unwrap().run(&input);
//!
//! assert!(output.primary.text.starts_with("GraphicEQ: 20 "));
//! assert!(output.primary.curve.max_gain().unwrap() <= 0.0);
//! ```

pub mod builtin;
pub mod curve;
pub mod diagnostics;
pub mod format;
pub mod merge;
pub mod naming;
pub mod normalize;
pub mod overlay;
pub mod parse;
pub mod pipeline;
pub mod smooth;

// Re-export main types at crate root
pub use curve::{Curve, FrequencyAxis, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
pub use diagnostics::{Diagnostics, Stage, Warning};
pub use format::{NO_VALID_POINTS, format_curve, format_graphic_eq};
pub use merge::merge;
pub use naming::{OutputNaming, device_name_from_file_name};
pub use normalize::remove_preamp;
pub use overlay::{ControlPoint, OverlayCurve, OverlayError, apply_overlay};
pub use parse::{GRAPHIC_EQ_MARKER, ParseError, parse, parse_graphic_eq};
pub use pipeline::{
    OutputKind, Pipeline, PipelineError, PipelineOutput, PipelineResult, run_pipeline,
};
pub use smooth::{DEFAULT_START_FREQ_HZ, DEFAULT_WINDOW_SIZE, SmoothingConfig, smooth};

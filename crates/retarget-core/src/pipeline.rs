//! The two-branch conversion pipeline.
//!
//! ```text
//! input ─┬─ merge(correction) ── smooth ──┬── remove_preamp ── format  → primary
//!        │                                └── overlay ── smooth ── remove_preamp ── format → secondary
//! ```
//!
//! Both branches share the axis computed once from the input and correction
//! frequencies. A [`Pipeline`] holds only immutable configuration, so one
//! instance can serve any number of inputs, including from several threads.

use thiserror::Error;

use crate::builtin;
use crate::curve::{Curve, FrequencyAxis};
use crate::diagnostics::Diagnostics;
use crate::format::format_graphic_eq;
use crate::merge::merge;
use crate::normalize::remove_preamp;
use crate::overlay::{OverlayCurve, OverlayError, apply_overlay};
use crate::parse::ParseError;
use crate::smooth::{SmoothingConfig, smooth};

/// Failures building a pipeline from its fixed curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The correction curve text did not parse.
    #[error("correction curve is invalid: {0}")]
    Correction(#[from] ParseError),

    /// The overlay control points were rejected.
    #[error("overlay curve is invalid: {0}")]
    Overlay(#[from] OverlayError),
}

/// Which branch produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutputKind {
    /// Correction + smoothing + no-preamp.
    Primary,
    /// Primary pre-normalization curve + overlay + smoothing + no-preamp.
    Secondary,
}

impl OutputKind {
    /// Both kinds in output order.
    pub const ALL: [OutputKind; 2] = [OutputKind::Primary, OutputKind::Secondary];
}

/// One finished output curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// Branch that produced this result.
    pub kind: OutputKind,
    /// Final normalized curve.
    pub curve: Curve,
    /// `curve` rendered as a GraphicEQ line.
    pub text: String,
}

/// Everything a single [`Pipeline::run`] produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Shared frequency axis of both outputs.
    pub axis: FrequencyAxis,
    /// Correction, smoothing and normalization.
    pub primary: PipelineResult,
    /// Primary branch plus the overlay pass.
    pub secondary: PipelineResult,
    /// Warnings from every stage, in the order they occurred.
    pub diagnostics: Diagnostics,
}

impl PipelineOutput {
    /// Result for `kind`.
    pub fn result(&self, kind: OutputKind) -> &PipelineResult {
        match kind {
            OutputKind::Primary => &self.primary,
            OutputKind::Secondary => &self.secondary,
        }
    }

    /// Both results in output order.
    pub fn results(&self) -> [&PipelineResult; 2] {
        [&self.primary, &self.secondary]
    }
}

/// Fixed correction and overlay curves plus smoothing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    correction: Curve,
    overlay: OverlayCurve,
    smoothing: SmoothingConfig,
}

impl Pipeline {
    /// Build a pipeline from injected curves.
    pub fn new(correction: Curve, overlay: OverlayCurve, smoothing: SmoothingConfig) -> Self {
        Self {
            correction,
            overlay,
            smoothing,
        }
    }

    /// The Harman → VDSF correction, the Wavelet overlay and default smoothing.
    pub fn standard() -> Result<Self, PipelineError> {
        Ok(Self::new(
            builtin::harman_to_vdsf()?,
            builtin::wavelet_overlay()?,
            SmoothingConfig::default(),
        ))
    }

    /// Replace the smoothing parameters.
    pub fn with_smoothing(mut self, smoothing: SmoothingConfig) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Correction curve merged into every input.
    pub fn correction(&self) -> &Curve {
        &self.correction
    }

    /// Overlay curve used by the secondary branch.
    pub fn overlay(&self) -> &OverlayCurve {
        &self.overlay
    }

    /// Smoothing parameters used by both branches.
    pub fn smoothing(&self) -> &SmoothingConfig {
        &self.smoothing
    }

    /// Convert `input` into the primary and secondary outputs.
    pub fn run(&self, input: &Curve) -> PipelineOutput {
        let mut diagnostics = Diagnostics::new();

        let (merged, axis) = merge(input, &self.correction);
        tracing::debug!(
            input_points = input.len(),
            axis_points = axis.len(),
            "merged correction curve"
        );
        let smoothed = smooth(&merged, &axis, &self.smoothing, &mut diagnostics);

        let primary = finish(OutputKind::Primary, &smoothed, &axis, &mut diagnostics);

        let overlaid = apply_overlay(&smoothed, &axis, &self.overlay, &mut diagnostics);
        let resmoothed = smooth(&overlaid, &axis, &self.smoothing, &mut diagnostics);
        let secondary = finish(OutputKind::Secondary, &resmoothed, &axis, &mut diagnostics);

        tracing::info!(
            points = axis.len(),
            warnings = diagnostics.len(),
            "pipeline finished"
        );

        PipelineOutput {
            axis,
            primary,
            secondary,
            diagnostics,
        }
    }
}

fn finish(
    kind: OutputKind,
    curve: &Curve,
    axis: &FrequencyAxis,
    diagnostics: &mut Diagnostics,
) -> PipelineResult {
    let curve = remove_preamp(curve, axis, diagnostics);
    let text = format_graphic_eq(&curve, axis, diagnostics);
    PipelineResult { kind, curve, text }
}

/// Run the standard pipeline on `input`.
pub fn run_pipeline(input: &Curve) -> Result<PipelineOutput, PipelineError> {
    Ok(Pipeline::standard()?.run(input))
}

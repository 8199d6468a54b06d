//! Report what a GraphicEQ file contains.

use clap::Args;
use retarget_core::{Diagnostics, Warning};
use serde::Serialize;
use std::path::PathBuf;

use super::common::{device_name_for, read_curve};

/// Inspect a GraphicEQ file.
#[derive(Args)]
pub struct InspectArgs {
    /// GraphicEQ file to inspect
    pub input: PathBuf,

    /// Emit a JSON report
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    file: String,
    device: String,
    points: usize,
    min_freq: Option<u32>,
    max_freq: Option<u32>,
    min_gain: Option<f64>,
    max_gain: Option<f64>,
    warnings: &'a Diagnostics,
}

/// Run the inspect command.
pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let (curve, diagnostics) = read_curve(&args.input)?;
    let axis = curve.axis();

    let report = Report {
        file: args.input.display().to_string(),
        device: device_name_for(&args.input),
        points: curve.len(),
        min_freq: axis.as_slice().first().copied(),
        max_freq: axis.as_slice().last().copied(),
        min_gain: curve.min_gain(),
        max_gain: curve.max_gain(),
        warnings: &diagnostics,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File:       {}", report.file);
    println!("Device:     {}", report.device);
    println!("Points:     {}", report.points);
    if let (Some(lo), Some(hi)) = (report.min_freq, report.max_freq) {
        println!("Frequency:  {lo} Hz - {hi} Hz");
    }
    if let (Some(lo), Some(hi)) = (report.min_gain, report.max_gain) {
        println!("Gain:       {lo:.1} dB to {hi:.1} dB");
    }
    println!("Warnings:   {}", diagnostics.len());
    for warning in &diagnostics {
        println!("  {}", describe(warning));
    }

    Ok(())
}

fn describe(warning: &Warning) -> String {
    format!("[{:?}] {warning}", warning.stage())
}

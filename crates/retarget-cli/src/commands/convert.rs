//! Convert a GraphicEQ file into the two retargeted outputs.

use anyhow::Context;
use clap::Args;
use retarget_core::OutputKind;
use std::path::PathBuf;

use super::common::{device_name_for, load_settings, read_curve};

/// Convert a GraphicEQ file.
#[derive(Args)]
pub struct ConvertArgs {
    /// GraphicEQ file to convert
    pub input: PathBuf,

    /// Directory for the output files (default: the input file's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Device name used in output file names (default: derived from the input file name)
    #[arg(short, long)]
    pub device: Option<String>,

    /// Settings file (default: the user settings file, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Moving-average window in axis points (odd, greater than 1)
    #[arg(long)]
    pub window: Option<usize>,

    /// Lower edge of the smoothed band in Hz
    #[arg(long)]
    pub start_freq: Option<f64>,

    /// Print both outputs to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let (mut settings, base_dir) = load_settings(args.config.as_deref())?;
    if let Some(window) = args.window {
        settings.smoothing.window_size = window;
    }
    if let Some(start_freq) = args.start_freq {
        settings.smoothing.start_freq_hz = start_freq;
    }
    let pipeline = settings.to_pipeline(base_dir.as_deref())?;

    let (input, mut diagnostics) = read_curve(&args.input)?;
    let mut output = pipeline.run(&input);
    diagnostics.append(&mut output.diagnostics);

    let device = match args.device {
        Some(device) => device,
        None => device_name_for(&args.input),
    };
    let naming = settings.output_naming();
    let warnings = diagnostics.len();

    if args.stdout {
        for result in output.results() {
            println!("# {}", naming.file_name(result.kind, &device));
            println!("{}", result.text);
        }
        tracing::info!(
            device = %device,
            points = output.axis.len(),
            warnings,
            "converted"
        );
        return Ok(());
    }

    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => match args.input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create directory '{}'", output_dir.display()))?;

    println!("Device:   {device}");
    println!("Points:   {}", output.axis.len());
    for kind in OutputKind::ALL {
        let result = output.result(kind);
        let path = output_dir.join(naming.file_name(kind, &device));
        std::fs::write(&path, &result.text)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!("Wrote:    {}", path.display());
    }
    println!("Warnings: {warnings}");

    Ok(())
}

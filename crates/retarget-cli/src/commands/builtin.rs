//! Print the built-in curves.

use clap::{Args, ValueEnum};
use retarget_core::{Diagnostics, builtin, format_curve};

/// Print a built-in curve.
#[derive(Args)]
pub struct BuiltinArgs {
    /// Which curve to print
    #[arg(value_enum)]
    pub curve: BuiltinCurve,
}

/// Built-in curves.
#[derive(Clone, Copy, ValueEnum)]
pub enum BuiltinCurve {
    /// Harman → VDSF correction merged into every input
    Correction,
    /// Wavelet overlay control points used by the secondary output
    Overlay,
}

/// Run the builtin command.
pub fn run(args: BuiltinArgs) -> anyhow::Result<()> {
    let curve = match args.curve {
        BuiltinCurve::Correction => builtin::harman_to_vdsf()?,
        BuiltinCurve::Overlay => builtin::wavelet_overlay()?.to_curve(),
    };

    let mut diagnostics = Diagnostics::new();
    println!("{}", format_curve(&curve, &mut diagnostics));
    Ok(())
}

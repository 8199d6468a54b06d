//! Retarget CLI - Convert Harman-target GraphicEQ curves to VDSF-target curves.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "retarget")]
#[command(author, version, about = "GraphicEQ Harman → VDSF retargeting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a GraphicEQ file into the primary and secondary outputs
    Convert(commands::convert::ConvertArgs),

    /// Show points, ranges and parse warnings of a GraphicEQ file
    Inspect(commands::inspect::InspectArgs),

    /// Print a built-in curve in GraphicEQ format
    Builtin(commands::builtin::BuiltinArgs),

    /// Show, locate or create the settings file
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Builtin(args) => commands::builtin::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

//! Settings file commands.

use clap::{Args, Subcommand};
use retarget_config::{CONFIG_FILE_NAME, Settings, default_config_path, ensure_user_config_dir};
use std::path::PathBuf;

use super::common::load_settings;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective settings as TOML
    Show {
        /// Settings file (default: the user settings file, if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default settings file path
    Path,

    /// Write a settings file with the default values
    Init {
        /// Where to write (default: the user settings file)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { config } => show(config),
        ConfigCommand::Path => {
            println!("{}", default_config_path().display());
            Ok(())
        }
        ConfigCommand::Init { config, force } => init(config, force),
    }
}

fn show(config: Option<PathBuf>) -> anyhow::Result<()> {
    let (settings, _) = load_settings(config.as_deref())?;
    print!("{}", settings.to_toml()?);
    Ok(())
}

fn init(config: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = match config {
        Some(path) => path,
        None => ensure_user_config_dir()?.join(CONFIG_FILE_NAME),
    };
    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    Settings::default().save(&path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

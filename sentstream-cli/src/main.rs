use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sentstream_cli::{commands::Commands, config::CliConfig};

/// Incremental sentence segmentation
#[derive(Debug, Parser)]
#[command(name = "sentstream", version, about, long_about = None)]
struct Cli {
    /// CLI configuration file providing default language, format and chunk size
    #[arg(long, global = true, value_name = "FILE", env = "SENTSTREAM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    cli.command.execute(&config)
}

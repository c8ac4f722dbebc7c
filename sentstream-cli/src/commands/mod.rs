//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use sentstream_core::language;

use crate::{config::CliConfig, output::OutputFormat};

pub mod generate_config;
pub mod split;
pub mod stream;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split whole files into sentences
    Split(split::SplitArgs),

    /// Segment standard input incrementally, printing sentences as they complete
    Stream(stream::StreamArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available language rules
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(config),
            Commands::Stream(args) => args.execute(config),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for (code, name) in language::available_languages() {
                    let display = language::get_rules(code)
                        .map(|rules| rules.name().to_string())
                        .unwrap_or_else(|_| name.to_string());
                    println!("  {code} - {display}");
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        println!("  {:<10} {}", value.get_name(), format.description());
                    }
                }
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second init (unit tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}

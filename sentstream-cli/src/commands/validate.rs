//! Validate command implementation

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Args;
use sentstream_core::ConfigurableLanguageRules;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,

    /// Segment this text with the configuration and print the result
    #[arg(short, long, value_name = "TEXT")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        let rules = match ConfigurableLanguageRules::from_file(&self.language_config, None) {
            Ok(rules) => rules,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        println!("✓ Configuration is valid!");
        println!("  Language code: {}", rules.language_code());
        println!("  Language name: {}", rules.language_name());

        if let Some(sample) = &self.sample {
            println!();
            println!("Sample segmentation:");
            for (i, sentence) in sentstream_core::split_with(sample, Arc::new(rules))
                .iter()
                .enumerate()
            {
                println!("  {}. {}", i + 1, sentence);
            }
        }

        Ok(())
    }
}

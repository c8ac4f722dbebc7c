//! Generate configuration template command

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sentstream_core::language;

use crate::language_source::Language;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Start from a built-in language instead of the minimal template
    #[arg(long, value_enum, value_name = "LANGUAGE")]
    pub from: Option<Language>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

const TEMPLATE: &str = r#"# Language configuration for {code}

[metadata]
code = "{code}"
name = "Custom Language"

[terminators]
# Sentence-ending characters; multi-char runs like "?!" are handled automatically
chars = [".", "!", "?"]
# Treat a line break outside brackets and quotes as a boundary
line_break = true

[ellipsis]
# Runs that never end a sentence on their own
patterns = ["...", "…"]

[enclosures]
# Text inside a pair never ends a sentence
pairs = [
    { open = "(", close = ")" },
    { open = "[", close = "]" },
    { open = "{", close = "}" },
    { open = "\"", close = "\"", symmetric = true },
    { open = "'", close = "'", symmetric = true },
]
# Closers that belong to the sentence they follow
trailing = ["\"", "'", ")", "]", "}"]

[suppression]
# Characters that are not enclosures in this context
fast_patterns = [
    # Apostrophes in contractions
    { char = "'", before = "alpha", after = "alpha" },
]

[list_markers]
# "1. Item" does not end a sentence after the number
enabled = true

# Abbreviations organized by category, written without the final dot.
# Category names are arbitrary.
[abbreviations]
titles = ["dr", "mr", "mrs", "ms", "prof"]
business = ["inc", "corp", "ltd", "co"]
common = ["etc", "vs", "e.g", "i.e"]
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template()?)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize language rules");
        println!("2. Validate your configuration:");
        println!(
            "   sentstream validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   sentstream split -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    fn generate_template(&self) -> Result<String> {
        let Some(base) = self.from else {
            return Ok(TEMPLATE.replace("{code}", &self.language_code));
        };

        let source = language::embedded_source(base.code())
            .with_context(|| format!("No embedded configuration for {}", base.as_str()))?;

        // Only the first `code` key belongs to [metadata]
        let mut replaced = false;
        let lines: Vec<String> = source
            .lines()
            .map(|line| {
                if !replaced && line.trim_start().starts_with("code = ") {
                    replaced = true;
                    format!("code = \"{}\"", self.language_code)
                } else {
                    line.to_string()
                }
            })
            .collect();

        Ok(format!(
            "# Based on the built-in {} rules\n{}\n",
            base.as_str(),
            lines.join("\n")
        ))
    }
}

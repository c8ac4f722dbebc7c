//! Split command implementation

use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Args;
use regex::Regex;
use sentstream_core::LanguageRules;

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_encoding, resolve_patterns, FileReader},
    language_source::{Language, LanguageSource},
    output::{create_formatter, OutputFormat, OutputFormatter},
    progress::ProgressReporter,
};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from --config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in language rules [default: from --config, else english]
    #[arg(short, long, value_enum, conflicts_with = "language_config")]
    pub language: Option<Language>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Override the language code of an external configuration
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// Regex marking hard breaks; each piece is segmented on its own
    #[arg(long, value_name = "REGEX")]
    pub split_pattern: Option<String>,

    /// Input encoding label, e.g. shift_jis or latin1 [default: utf-8]
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;
        let rules = self.language_source(config)?.load()?;
        let encoding = resolve_encoding(self.encoding.as_deref())?;
        let pattern = self.compile_split_pattern()?;
        let format = match self.format {
            Some(format) => format,
            None => config.format()?,
        };

        let mut formatter: Box<dyn OutputFormatter> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                create_formatter(format, BufWriter::new(file))
            }
            None => create_formatter(format, io::stdout()),
        };

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        for path in &files {
            let text = FileReader::read_text(path, encoding)?;
            let sentences = segment_text(&text, &rules, pattern.as_ref());
            let source = path.display().to_string();

            for sentence in &sentences {
                formatter.format_sentence(sentence, &source)?;
            }
            progress.file_completed(&source, sentences.len());
        }

        formatter.finish()?;
        progress.finish();
        log::info!(
            "Split {} files into {} sentences",
            files.len(),
            progress.sentences()
        );

        Ok(())
    }

    fn language_source(&self, config: &CliConfig) -> Result<LanguageSource> {
        let language = match self.language {
            Some(language) => language,
            None => config.language()?,
        };
        Ok(LanguageSource::select(
            language,
            self.language_config.as_ref(),
            self.language_code.as_ref(),
        ))
    }

    fn compile_split_pattern(&self) -> Result<Option<Regex>> {
        self.split_pattern
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    anyhow::Error::from(CliError::InvalidPattern(format!("{pattern}: {e}")))
                })
            })
            .transpose()
    }
}

/// Segment a complete text, treating every `pattern` match as a hard break
pub fn segment_text(
    text: &str,
    rules: &Arc<dyn LanguageRules>,
    pattern: Option<&Regex>,
) -> Vec<String> {
    match pattern {
        Some(pattern) => pattern
            .split(text)
            .flat_map(|piece| sentstream_core::split_with(piece, Arc::clone(rules)))
            .collect(),
        None => sentstream_core::split_with(text, Arc::clone(rules)),
    }
}

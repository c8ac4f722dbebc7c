//! Stream command implementation

use std::{
    io::{self, ErrorKind, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Args;
use sentstream_core::Segmenter;

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_encoding, ChunkDecoder},
    language_source::{Language, LanguageSource},
    output::{create_streaming_formatter, OutputFormat, OutputFormatter},
};

/// Source name reported for standard input
pub const STDIN_SOURCE: &str = "-";

/// Arguments for the stream command
#[derive(Debug, Args)]
pub struct StreamArgs {
    /// Bytes per read from standard input [default: from --config, else 4096]
    #[arg(long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,

    /// Output format; json writes one record per line
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in language rules
    #[arg(short, long, value_enum, conflicts_with = "language_config")]
    pub language: Option<Language>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Override the language code of an external configuration
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// Input encoding label [default: utf-8]
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl StreamArgs {
    /// Execute the stream command over stdin and stdout
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let count = self.run(config, io::stdin().lock(), io::stdout())?;
        log::info!("Streamed {count} sentences");
        Ok(())
    }

    /// Segment `reader` incrementally, writing each sentence once confirmed
    pub fn run<R, W>(&self, config: &CliConfig, mut reader: R, writer: W) -> Result<usize>
    where
        R: Read,
        W: Write + Send + Sync,
    {
        let language = match self.language {
            Some(language) => language,
            None => config.language()?,
        };
        let rules = LanguageSource::select(
            language,
            self.language_config.as_ref(),
            self.language_code.as_ref(),
        )
        .load()?;
        let format = match self.format {
            Some(format) => format,
            None => config.format()?,
        };
        let chunk_size = self
            .chunk_size
            .unwrap_or(config.performance.stream_chunk_bytes)
            .max(1);

        let mut decoder = ChunkDecoder::new(resolve_encoding(self.encoding.as_deref())?);
        let mut segmenter = Segmenter::with_rules(rules);
        let mut formatter = create_streaming_formatter(format, writer);
        let mut buf = vec![0u8; chunk_size];
        let mut emitted = 0;

        loop {
            let read = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context("Failed to read input"),
            };

            let text = decoder.decode(&buf[..read], false);
            segmenter.push(&text).map_err(CliError::from)?;
            emitted += emit(&mut segmenter, formatter.as_mut())?;
        }

        let tail = decoder.decode(&[], true);
        segmenter.push(&tail).map_err(CliError::from)?;
        segmenter.close();
        emitted += emit(&mut segmenter, formatter.as_mut())?;
        formatter.finish()?;

        if decoder.had_replacements() {
            log::warn!("Malformed input was replaced with U+FFFD");
        }
        let stats = segmenter.stats();
        log::debug!("Read {} bytes in {} chunks", stats.bytes, stats.chunks);

        Ok(emitted)
    }
}

fn emit<F>(segmenter: &mut Segmenter, formatter: &mut F) -> Result<usize>
where
    F: OutputFormatter + ?Sized,
{
    let mut count = 0;
    for sentence in segmenter.drain() {
        formatter.format_sentence(&sentence, STDIN_SOURCE)?;
        count += 1;
    }
    Ok(count)
}

//! Output formatting module

use std::io::Write;

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and write a single sentence
    fn format_sentence(&mut self, sentence: &str, source: &str) -> Result<()>;

    /// Finalize output (e.g. close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{JsonFormatter, JsonLinesFormatter, SentenceRecord};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one sentence per line",
            OutputFormat::Json => "JSON array of {index, text, source} (JSON lines when streaming)",
            OutputFormat::Markdown => "Numbered Markdown list with a total",
        }
    }
}

/// Formatter for a complete document
pub fn create_formatter<'a, W>(format: OutputFormat, writer: W) -> Box<dyn OutputFormatter + 'a>
where
    W: Write + Send + Sync + 'a,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Formatter that writes every sentence as soon as it arrives
pub fn create_streaming_formatter<'a, W>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a>
where
    W: Write + Send + Sync + 'a,
{
    match format {
        OutputFormat::Json => Box::new(JsonLinesFormatter::new(writer)),
        other => create_formatter(other, writer),
    }
}

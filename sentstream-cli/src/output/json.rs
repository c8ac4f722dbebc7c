//! JSON output formatters

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::OutputFormatter;

/// One segmented sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Zero-based position in the output
    pub index: usize,
    pub text: String,
    /// Input file, or `-` for standard input
    pub source: String,
}

/// Collects every sentence and writes one pretty-printed array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceRecord>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, source: &str) -> Result<()> {
        self.sentences.push(SentenceRecord {
            index: self.sentences.len(),
            text: sentence.to_string(),
            source: source.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes one compact record per line as sentences arrive
pub struct JsonLinesFormatter<W: Write> {
    writer: W,
    count: usize,
}

impl<W: Write> JsonLinesFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonLinesFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, source: &str) -> Result<()> {
        let record = SentenceRecord {
            index: self.count,
            text: sentence.to_string(),
            source: source.to_string(),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        self.count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

//! Error handling for the CLI application

use std::fmt;

/// User-facing error categories
#[derive(Debug)]
pub enum CliError {
    /// No input file matched
    FileNotFound(String),
    /// Invalid glob or split pattern
    InvalidPattern(String),
    /// Bad CLI or language configuration
    ConfigError(String),
    /// Segmentation failure reported by the core library
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<sentstream_core::SegmentError> for CliError {
    fn from(error: sentstream_core::SegmentError) -> Self {
        use sentstream_core::SegmentError;

        match error {
            SegmentError::Config(_)
            | SegmentError::UnsupportedLanguage { .. }
            | SegmentError::Toml(_) => CliError::ConfigError(error.to_string()),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

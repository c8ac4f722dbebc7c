//! Error types for segmentation and language configuration

use thiserror::Error;

/// Errors raised by the segmenter and the language configuration layer
#[derive(Error, Debug)]
pub enum SegmentError {
    /// Text was pushed after the stream was closed
    #[error("segmenter is closed; no more input is accepted")]
    Closed,

    /// Chunk is not valid UTF-8
    #[error("invalid UTF-8 in chunk after {valid_up_to} valid bytes")]
    InvalidUtf8 {
        /// Number of leading bytes that formed valid UTF-8
        valid_up_to: usize,
    },

    /// Language configuration failed validation
    #[error("invalid language configuration: {0}")]
    Config(String),

    /// No embedded rules for this language code
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that was requested
        code: String,
    },

    /// Language configuration could not be parsed
    #[error("failed to parse language configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;

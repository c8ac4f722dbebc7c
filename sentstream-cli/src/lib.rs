//! sentstream CLI library
//!
//! Command-line front end for the `sentstream-core` segmenter: whole-file
//! splitting, incremental stdin streaming and language config tooling.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

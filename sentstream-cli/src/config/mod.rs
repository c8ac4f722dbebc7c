//! Configuration module

use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{error::CliError, language_source::Language, output::OutputFormat};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default language for processing
    pub default_language: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_language: "english".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Read size for `stream` (bytes)
    pub stream_chunk_bytes: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            stream_chunk_bytes: 4096,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file, or use defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read CLI config: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse CLI config: {}", path.display()))?;

        // Surface bad names now rather than on first use
        config.language()?;
        config.format()?;
        if config.performance.stream_chunk_bytes == 0 {
            return Err(CliError::ConfigError("stream_chunk_bytes must be positive".to_string()).into());
        }

        log::debug!("Loaded CLI config from {}", path.display());
        Ok(config)
    }

    pub fn language(&self) -> Result<Language> {
        let name = &self.processing.default_language;
        Language::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown language '{name}'")).into())
    }

    pub fn format(&self) -> Result<OutputFormat> {
        let name = &self.output.default_format;
        OutputFormat::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown format '{name}'")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert!(matches!(config.language().unwrap(), Language::English));
        assert!(matches!(config.format().unwrap(), OutputFormat::Text));
        assert_eq!(config.performance.stream_chunk_bytes, 4096);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndefault_format = \"json\"").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert!(matches!(config.format().unwrap(), OutputFormat::Json));
        assert!(matches!(config.language().unwrap(), Language::English));
        assert_eq!(config.performance.stream_chunk_bytes, 4096);
    }

    #[test]
    fn test_case_insensitive_names() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\ndefault_language = \"Japanese\"").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert!(matches!(config.language().unwrap(), Language::Japanese));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndefault_format = \"xml\"").unwrap();

        let err = CliConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("unknown format 'xml'"));
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[performance]\nstream_chunk_bytes = 0").unwrap();

        assert!(CliConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/cli.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read CLI config"));
    }
}

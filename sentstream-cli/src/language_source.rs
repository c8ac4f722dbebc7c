//! Language source management for CLI

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use sentstream_core::{language, ConfigurableLanguageRules, LanguageRules};

use crate::error::CliError;

/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// English language rules
    English,
    /// Japanese language rules
    Japanese,
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }
}

/// Source of language rules
#[derive(Debug, Clone)]
pub enum LanguageSource {
    BuiltIn(Language),
    /// External configuration file
    External {
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

impl LanguageSource {
    /// An external config wins over the built-in language
    pub fn select(
        language: Language,
        config_path: Option<&PathBuf>,
        language_code: Option<&String>,
    ) -> Self {
        match config_path {
            Some(path) => LanguageSource::External {
                path: path.clone(),
                language_code: language_code.cloned(),
            },
            None => LanguageSource::BuiltIn(language),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External {
                path,
                language_code,
            } => {
                if let Some(code) = language_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }

    pub fn load(&self) -> Result<Arc<dyn LanguageRules>> {
        log::info!("Using language rules: {}", self.display_name());

        match self {
            LanguageSource::BuiltIn(lang) => {
                language::get_rules(lang.code()).map_err(|e| CliError::from(e).into())
            }
            LanguageSource::External {
                path,
                language_code,
            } => {
                let rules = ConfigurableLanguageRules::from_file(path, language_code.as_deref())
                    .map_err(CliError::from)
                    .with_context(|| format!("Failed to load language config: {}", path.display()))?;
                Ok(Arc::new(rules))
            }
        }
    }
}

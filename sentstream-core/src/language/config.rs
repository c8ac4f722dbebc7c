//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentError};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub ellipsis: Ellipsis,
    pub enclosures: Enclosures,
    #[serde(default)]
    pub suppression: Suppression,
    #[serde(default)]
    pub list_markers: ListMarkers,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
    /// Treat a single line break as a weak boundary
    #[serde(default = "default_true")]
    pub line_break: bool,
}

/// Ellipsis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipsis {
    pub patterns: Vec<String>,
}

impl Default for Ellipsis {
    fn default() -> Self {
        Self {
            patterns: vec!["...".to_string(), "…".to_string()],
        }
    }
}

/// Enclosure configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enclosures {
    pub pairs: Vec<EnclosurePair>,
    /// Closers absorbed into a sentence right after its final punctuation
    #[serde(default)]
    pub trailing: Vec<char>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosurePair {
    pub open: char,
    pub close: char,
    #[serde(default)]
    pub symmetric: bool,
}

/// Suppression configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suppression {
    #[serde(default)]
    pub fast_patterns: Vec<FastPattern>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastPattern {
    pub char: char,
    #[serde(default)]
    pub line_start: bool,
    pub before: Option<String>,
    pub after: Option<String>,
}

/// Numbered list marker handling (`1. First item`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMarkers {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ListMarkers {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Abbreviation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.terminators.chars.is_empty() {
            return Err(SegmentError::Config(
                "No terminator characters defined".to_string(),
            ));
        }

        if self.enclosures.pairs.len() > 255 {
            return Err(SegmentError::Config(
                "Too many enclosure pairs (max 255)".to_string(),
            ));
        }

        for pair in &self.enclosures.pairs {
            for ch in [pair.open, pair.close] {
                if self.terminators.chars.contains(&ch) {
                    return Err(SegmentError::Config(format!(
                        "Enclosure character '{ch}' is also a terminator"
                    )));
                }
            }
        }

        if self.terminators.chars.contains(&'\n') {
            return Err(SegmentError::Config(
                "Line breaks are configured with `line_break`, not as terminator chars".to_string(),
            ));
        }

        for (category, entries) in &self.abbreviations.categories {
            if entries.iter().any(|entry| entry.trim().is_empty()) {
                return Err(SegmentError::Config(format!(
                    "Empty abbreviation in category '{category}'"
                )));
            }
        }

        Ok(())
    }
}

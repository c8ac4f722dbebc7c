//! Runtime implementation of language rules
//!
//! Bridges the TOML configuration and the [`LanguageRules`] trait.

use std::path::Path;

use tracing::debug;

use crate::{
    error::Result,
    language::{
        config::LanguageConfig,
        interface::{EnclosureInfo, LanguageRules},
        tables::*,
    },
};

/// Configurable language rules implementation
#[derive(Debug, Clone)]
pub struct ConfigurableLanguageRules {
    code: String,
    name: String,

    term_table: TermTable,
    enclosures: EncTable,
    abbv_trie: Trie,
    ellipsis: EllipsisSet,
    suppress: Suppresser,
    list_markers: bool,
}

impl ConfigurableLanguageRules {
    /// Create from a parsed configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let rules = Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            term_table: TermTable::new(&config.terminators),
            enclosures: EncTable::new(&config.enclosures),
            abbv_trie: Trie::from_categories(&config.abbreviations.categories),
            ellipsis: EllipsisSet::new(&config.ellipsis.patterns),
            suppress: Suppresser::new(&config.suppression.fast_patterns),
            list_markers: config.list_markers.enabled,
        };

        debug!(
            code = %rules.code,
            terminators = rules.term_table.count(),
            abbreviations = rules.abbv_trie.len(),
            enclosure_pairs = rules.enclosures.pair_count(),
            "built language rules"
        );

        Ok(rules)
    }

    /// Parse and build from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(text)?;
        Self::from_config(&config)
    }

    /// Load from a TOML file, optionally overriding its language code
    pub fn from_file(path: impl AsRef<Path>, code_override: Option<&str>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let mut config: LanguageConfig = toml::from_str(&text)?;

        if let Some(code) = code_override {
            config.metadata.code = code.to_string();
        }

        Self::from_config(&config)
    }

    /// Get the language code
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// Get the language name
    pub fn language_name(&self) -> &str {
        &self.name
    }
}

impl LanguageRules for ConfigurableLanguageRules {
    #[inline]
    fn is_terminator_char(&self, ch: char) -> bool {
        self.term_table.is_terminator(ch)
    }

    #[inline]
    fn breaks_on_newline(&self) -> bool {
        self.term_table.line_break()
    }

    #[inline]
    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo> {
        self.enclosures.get(ch)
    }

    #[inline]
    fn is_trailing_char(&self, ch: char) -> bool {
        self.enclosures.is_trailing(ch)
    }

    fn suppresses_enclosure(
        &self,
        prev: Option<char>,
        ch: char,
        next: Option<char>,
        at_line_start: bool,
    ) -> bool {
        self.suppress.should_suppress(prev, ch, next, at_line_start)
    }

    fn needs_lookahead(&self, ch: char) -> bool {
        self.suppress.needs_lookahead(ch)
    }

    fn is_abbreviation(&self, token: &str) -> bool {
        self.abbv_trie.contains(token)
    }

    fn is_ellipsis_char(&self, ch: char) -> bool {
        self.ellipsis.is_ellipsis_char(ch)
    }

    fn is_bare_ellipsis(&self, text: &str) -> bool {
        self.ellipsis.is_bare_ellipsis(text)
    }

    fn detects_list_markers(&self) -> bool {
        self.list_markers
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

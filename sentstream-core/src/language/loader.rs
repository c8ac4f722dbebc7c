//! Language configuration loader
//!
//! Embedded language configurations are parsed once and shared.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::error;

use crate::{
    error::{Result, SegmentError},
    language::{
        interface::{EnclosureInfo, LanguageRules},
        rules::ConfigurableLanguageRules,
    },
};

/// Embedded configurations as `(code, name, toml)`
const EMBEDDED_SOURCES: &[(&str, &str, &str)] = &[
    (
        "en",
        "english",
        include_str!("../../configs/languages/english.toml"),
    ),
    (
        "ja",
        "japanese",
        include_str!("../../configs/languages/japanese.toml"),
    ),
];

static EMBEDDED: OnceLock<HashMap<String, Arc<dyn LanguageRules>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<dyn LanguageRules>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for &(code, name, source) in EMBEDDED_SOURCES {
            match ConfigurableLanguageRules::from_toml_str(source) {
                Ok(rules) => {
                    let rules: Arc<dyn LanguageRules> = Arc::new(rules);
                    map.insert(code.to_string(), rules.clone());
                    map.insert(name.to_string(), rules);
                }
                Err(e) => {
                    error!(code, "failed to load embedded language config: {e}");
                }
            }
        }

        map
    })
}

/// Load language rules by code (`en`, `english`, `ja`, `japanese`)
pub fn get_rules(code: &str) -> Result<Arc<dyn LanguageRules>> {
    embedded()
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| SegmentError::UnsupportedLanguage {
            code: code.to_string(),
        })
}

/// Embedded languages as `(code, name)`
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    EMBEDDED_SOURCES
        .iter()
        .map(|&(code, name, _)| (code, name))
        .collect()
}

/// Raw TOML of an embedded language, used as a template for custom configs
pub fn embedded_source(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    EMBEDDED_SOURCES
        .iter()
        .find(|(c, n, _)| *c == code || *n == code)
        .map(|&(_, _, source)| source)
}

/// Default English rules
pub fn english() -> Result<Arc<dyn LanguageRules>> {
    get_rules("en")
}

/// English rules, or [`SimpleRules`] if the embedded config is unusable
pub fn default_rules() -> Arc<dyn LanguageRules> {
    english().unwrap_or_else(|_| Arc::new(SimpleRules))
}

/// Minimal built-in rules: `.`, `!`, `?` and parentheses, nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRules;

impl LanguageRules for SimpleRules {
    fn is_terminator_char(&self, ch: char) -> bool {
        matches!(ch, '.' | '!' | '?')
    }

    fn breaks_on_newline(&self) -> bool {
        true
    }

    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo> {
        match ch {
            '(' => Some(EnclosureInfo {
                type_id: 0,
                delta: 1,
                symmetric: false,
            }),
            ')' => Some(EnclosureInfo {
                type_id: 0,
                delta: -1,
                symmetric: false,
            }),
            _ => None,
        }
    }

    fn is_trailing_char(&self, ch: char) -> bool {
        ch == ')'
    }

    fn suppresses_enclosure(
        &self,
        _prev: Option<char>,
        _ch: char,
        _next: Option<char>,
        _at_line_start: bool,
    ) -> bool {
        false
    }

    fn needs_lookahead(&self, _ch: char) -> bool {
        false
    }

    fn is_abbreviation(&self, _token: &str) -> bool {
        false
    }

    fn is_ellipsis_char(&self, _ch: char) -> bool {
        false
    }

    fn is_bare_ellipsis(&self, text: &str) -> bool {
        text.len() >= 3 && text.chars().all(|c| c == '.')
    }

    fn detects_list_markers(&self) -> bool {
        true
    }

    fn code(&self) -> &str {
        "simple"
    }

    fn name(&self) -> &str {
        "Simple"
    }
}

//! Language-specific rules for sentence boundary detection
//!
//! Rules are data: a TOML configuration is compiled into immutable lookup
//! tables behind the [`LanguageRules`] trait.

pub mod config;
pub mod interface;
pub(crate) mod loader;
pub mod rules;
pub(crate) mod tables;

pub use config::LanguageConfig;
pub use interface::*;
pub use loader::{
    available_languages, default_rules, embedded_source, english, get_rules, SimpleRules,
};
pub use rules::ConfigurableLanguageRules;

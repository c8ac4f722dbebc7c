//! Incremental sentence boundary segmentation
//!
//! Text arrives in arbitrary chunks (token deltas from a language model, a
//! socket, a pipe) and complete sentences come out as soon as each one can
//! be confirmed. A chunk boundary inside a word, number, abbreviation,
//! quotation or bracketed aside never causes a wrong split: any decision
//! that needs unseen text waits for it, so the output does not depend on
//! how the input was chunked.
//!
//! # Architecture
//!
//! - **Language rules**: TOML configurations compiled into immutable lookup
//!   tables ([`language`])
//! - **Classifier**: pure per-candidate decision, confirm / reject / defer
//!   ([`classifier`])
//! - **Segmenter**: scan state, output queue and synchronous draining
//!   ([`segmenter`])
//! - **Streams**: async consumption with wake-on-push ([`stream`])
//!
//! # Example
//!
//! ```rust
//! use sentstream_core::Segmenter;
//!
//! let mut segmenter = Segmenter::new();
//! segmenter.push("Dr. Smith paid $4.").unwrap();
//! assert_eq!(segmenter.next(), None);
//!
//! segmenter.push("99. He left").unwrap();
//! assert_eq!(segmenter.next().as_deref(), Some("Dr. Smith paid $4.99."));
//!
//! segmenter.close();
//! assert_eq!(segmenter.next().as_deref(), Some("He left"));
//! assert!(segmenter.is_exhausted());
//! ```

pub mod classifier;
pub mod error;
pub mod language;
pub mod segmenter;
pub mod stream;

use std::sync::Arc;

pub use classifier::{Classifier, NestingStack, NestingStep, Verdict};
pub use error::{Result, SegmentError};
pub use language::{ConfigurableLanguageRules, LanguageConfig, LanguageRules};
pub use segmenter::{normalize_whitespace, Drain, Segmenter, SegmenterStats};
pub use stream::{sentence_stream, SharedSegmenter};

/// Split a complete text with the default English rules
///
/// ```rust
/// let sentences = sentstream_core::split("Hello! How are you?");
/// assert_eq!(sentences, vec!["Hello!", "How are you?"]);
/// ```
pub fn split(text: &str) -> Vec<String> {
    split_with(text, language::default_rules())
}

/// Split a complete text with the given rules
pub fn split_with(text: &str, rules: Arc<dyn LanguageRules>) -> Vec<String> {
    let mut segmenter = Segmenter::with_rules(rules);
    segmenter.feed(text);
    segmenter.close();
    segmenter.drain().collect()
}

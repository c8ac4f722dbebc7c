//! Ellipsis pattern detection
//!
//! Handles `...` and `…` both as a run inside a sentence and as text that
//! cannot stand alone as a sentence.

/// Ellipsis pattern matcher
#[derive(Debug, Clone)]
pub struct EllipsisSet {
    /// Known ellipsis patterns, longest first
    patterns: Vec<String>,
}

impl EllipsisSet {
    /// Create ellipsis detector
    pub fn new(patterns: &[String]) -> Self {
        let mut patterns: Vec<String> = patterns
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();
        patterns.sort_by_key(|p| std::cmp::Reverse(p.len()));
        Self { patterns }
    }

    /// Whether `ch` on its own is an ellipsis (`…`)
    pub fn is_ellipsis_char(&self, ch: char) -> bool {
        self.patterns.iter().any(|p| {
            let mut chars = p.chars();
            chars.next() == Some(ch) && chars.next().is_none()
        })
    }

    /// Whether `text` is made of nothing but ellipsis patterns
    pub fn is_bare_ellipsis(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let mut rest = text;
        while !rest.is_empty() {
            match self.patterns.iter().find(|p| rest.starts_with(p.as_str())) {
                Some(pattern) => rest = &rest[pattern.len()..],
                None => return false,
            }
        }

        true
    }
}

//! Suppression rules for special patterns
//!
//! Decides when a quote character is not an enclosure at all, e.g. the
//! apostrophe in a contraction (`don't`, `It's`).

use crate::language::config::FastPattern;

/// Fast pattern matcher for suppression rules
#[derive(Debug, Clone, Default)]
pub struct Suppresser {
    patterns: Vec<Pattern>,
}

#[derive(Debug, Clone)]
struct Pattern {
    /// The character to match
    char: char,
    /// Must be at line start
    line_start: bool,
    /// Required before context (alpha, alnum, etc.)
    before: Option<CharClass>,
    /// Required after context
    after: Option<CharClass>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CharClass {
    Alpha,
    Alnum,
    Digit,
    Space,
}

impl CharClass {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "alpha" => Some(CharClass::Alpha),
            "alnum" => Some(CharClass::Alnum),
            "digit" => Some(CharClass::Digit),
            "space" => Some(CharClass::Space),
            _ => None,
        }
    }

    fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Alpha => ch.is_alphabetic(),
            CharClass::Alnum => ch.is_alphanumeric(),
            CharClass::Digit => ch.is_numeric(),
            CharClass::Space => ch.is_whitespace(),
        }
    }
}

impl Suppresser {
    /// Create from configured fast patterns; unknown class names never match
    pub fn new(patterns: &[FastPattern]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Pattern {
                char: p.char,
                line_start: p.line_start,
                before: p.before.as_deref().and_then(CharClass::parse),
                after: p.after.as_deref().and_then(CharClass::parse),
            })
            .collect();

        Self { patterns }
    }

    /// Check whether `ch`, seen between `prev` and `next`, is suppressed
    pub fn should_suppress(
        &self,
        prev: Option<char>,
        ch: char,
        next: Option<char>,
        at_line_start: bool,
    ) -> bool {
        self.patterns.iter().any(|pattern| {
            pattern.char == ch
                && (!pattern.line_start || at_line_start)
                && pattern
                    .before
                    .map_or(true, |class| prev.is_some_and(|c| class.matches(c)))
                && pattern
                    .after
                    .map_or(true, |class| next.is_some_and(|c| class.matches(c)))
        })
    }

    /// Whether any pattern needs the character after `ch`
    pub fn needs_lookahead(&self, ch: char) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.char == ch && pattern.after.is_some())
    }
}

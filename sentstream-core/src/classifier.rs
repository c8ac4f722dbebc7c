//! Boundary classifier
//!
//! Given the unfinished text of one sentence and the position of a candidate
//! terminator in it, decides whether the sentence ends there, does not end
//! there, or cannot be decided before more text arrives. The classifier is
//! pure: all scan state lives in the caller.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
    error::Result,
    language::{self, LanguageRules},
};

/// Open brackets and quotes, as enclosure type ids, innermost last
pub type NestingStack = SmallVec<[u8; 8]>;

/// Outcome of classifying one candidate position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A sentence ends at byte offset `end` (exclusive)
    Confirm {
        /// End of the sentence, past any trailing punctuation and closers
        end: usize,
    },
    /// Not a boundary
    Reject,
    /// Needs text beyond the current buffer end
    Defer,
}

/// Outcome of feeding one char to the nesting tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingStep {
    /// The stack reflects the char
    Tracked,
    /// The char's role depends on the next char, which has not arrived
    Defer,
}

/// Sentence boundary classifier over injected language rules
#[derive(Clone)]
pub struct Classifier {
    rules: Arc<dyn LanguageRules>,
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("language", &self.rules.code())
            .finish()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(language::default_rules())
    }
}

impl Classifier {
    pub fn new(rules: Arc<dyn LanguageRules>) -> Self {
        Self { rules }
    }

    /// Classifier for an embedded language (`en`, `ja`, ...)
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(language::get_rules(code)?))
    }

    /// Classifier for the embedded English rules
    pub fn english() -> Result<Self> {
        Self::for_language("en")
    }

    pub fn rules(&self) -> &Arc<dyn LanguageRules> {
        &self.rules
    }

    /// Whether `ch` is a position worth classifying
    #[inline]
    pub fn is_candidate(&self, ch: char) -> bool {
        self.rules.is_terminator_char(ch) || (ch == '\n' && self.rules.breaks_on_newline())
    }

    /// Update `stack` for the char at byte offset `pos`
    ///
    /// Openers push, the matching closer pops, a mismatched closer is
    /// ignored. A symmetric quote closes when it matches the top of the
    /// stack and opens otherwise, unless the language suppresses it in this
    /// context (an apostrophe inside `don't`). The stack is left untouched
    /// on [`NestingStep::Defer`].
    pub fn track_enclosure(
        &self,
        buffer: &str,
        pos: usize,
        stack: &mut NestingStack,
        closed: bool,
    ) -> NestingStep {
        let Some(ch) = buffer[pos..].chars().next() else {
            return NestingStep::Tracked;
        };
        let Some(info) = self.rules.enclosure_info(ch) else {
            return NestingStep::Tracked;
        };

        if info.symmetric {
            let next = buffer[pos + ch.len_utf8()..].chars().next();
            if next.is_none() && !closed && self.rules.needs_lookahead(ch) {
                return NestingStep::Defer;
            }

            let prev = buffer[..pos].chars().next_back();
            let at_line_start = prev.map_or(true, |c| c == '\n');
            if self.rules.suppresses_enclosure(prev, ch, next, at_line_start) {
                return NestingStep::Tracked;
            }

            if stack.last() == Some(&info.type_id) {
                stack.pop();
            } else {
                stack.push(info.type_id);
            }
        } else if info.delta > 0 {
            stack.push(info.type_id);
        } else if stack.last() == Some(&info.type_id) {
            stack.pop();
        }

        NestingStep::Tracked
    }

    /// Classify the candidate at byte offset `pos`
    ///
    /// `buffer` starts at the beginning of the current sentence. With
    /// `closed` set no more text will follow and the verdict is never
    /// [`Verdict::Defer`].
    pub fn classify(
        &self,
        buffer: &str,
        pos: usize,
        stack: &NestingStack,
        closed: bool,
    ) -> Verdict {
        self.classify_in_token(buffer, token_start(&buffer[..pos]), pos, stack, closed)
    }

    /// [`classify`](Self::classify) with the start of the token holding
    /// `pos` already known
    ///
    /// `token_start` is the byte after the last whitespace before `pos`, or 0.
    /// A scanner that tracks it avoids looking back over long tokens.
    pub fn classify_in_token(
        &self,
        buffer: &str,
        token_start: usize,
        pos: usize,
        stack: &NestingStack,
        closed: bool,
    ) -> Verdict {
        if !stack.is_empty() {
            return Verdict::Reject;
        }

        let Some(ch) = buffer[pos..].chars().next() else {
            return Verdict::Reject;
        };

        if ch == '\n' && self.rules.breaks_on_newline() {
            return if buffer[..pos].trim().is_empty() {
                Verdict::Reject
            } else {
                Verdict::Confirm { end: pos }
            };
        }

        if !self.rules.is_terminator_char(ch) {
            return Verdict::Reject;
        }

        if ch == '.' && self.rules.detects_list_markers() && is_list_marker(&buffer[..pos]) {
            return Verdict::Reject;
        }

        let start = pos + ch.len_utf8();
        let end = self.run_end(buffer, start);

        let after = &buffer[end..];
        let Some((gap, next_non_space)) = after.char_indices().find(|(_, c)| !c.is_whitespace())
        else {
            return if closed {
                Verdict::Confirm { end }
            } else {
                Verdict::Defer
            };
        };

        // Full-width terminators need no word context: 。次の文
        if !ch.is_ascii() && !self.rules.is_ellipsis_char(ch) {
            return Verdict::Confirm { end };
        }

        // Glued: 4.99, example.com, U.S.A
        if end == start && gap == 0 {
            return Verdict::Reject;
        }

        let token_end = match after.find(char::is_whitespace) {
            Some(i) => end + i,
            None if closed => buffer.len(),
            None => return Verdict::Defer,
        };
        let token = &buffer[token_start..token_end];

        if (token.contains("://") || token.contains('@'))
            && !token
                .chars()
                .next_back()
                .is_some_and(|c| self.rules.is_terminator_char(c))
        {
            return Verdict::Reject;
        }

        if self.rules.is_abbreviation(abbreviation_stem(token)) {
            return Verdict::Reject;
        }

        if is_initials(token) && next_non_space.is_uppercase() {
            return Verdict::Reject;
        }

        if (ch == '.' || self.rules.is_ellipsis_char(ch)) && next_non_space.is_lowercase() {
            return Verdict::Reject;
        }

        if self.rules.is_bare_ellipsis(buffer[..end].trim()) {
            return Verdict::Reject;
        }

        Verdict::Confirm { end }
    }

    /// Extend a run over further terminators, then trailing closers
    fn run_end(&self, buffer: &str, mut end: usize) -> usize {
        for c in buffer[end..].chars() {
            if !self.rules.is_terminator_char(c) {
                break;
            }
            end += c.len_utf8();
        }
        for c in buffer[end..].chars() {
            if !self.rules.is_trailing_char(c) {
                break;
            }
            end += c.len_utf8();
        }
        end
    }
}

/// The current line of the sentence is a bare number (`1`, `10`)
///
/// Walks back over the digits and the indent only, so the cost does not
/// grow with the length of the line.
fn is_list_marker(segment: &str) -> bool {
    let mut chars = segment.chars().rev().peekable();
    let mut digits = 0;
    while chars.next_if(|c| c.is_ascii_digit()).is_some() {
        digits += 1;
    }
    digits > 0
        && chars
            .take_while(|&c| c != '\n')
            .all(char::is_whitespace)
}

/// Byte offset just past the last whitespace in `prefix`
fn token_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Token reduced to the form stored in the abbreviation table
fn abbreviation_stem(token: &str) -> &str {
    let stem = token.trim_start_matches(|c: char| !c.is_alphanumeric());
    let stem = ["'s", "'S", "’s", "’S"]
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix))
        .unwrap_or(stem);
    stem.trim_end_matches('.')
}

/// `E.` or `J.R.R.`
fn is_initials(token: &str) -> bool {
    let bytes = token.as_bytes();
    !bytes.is_empty()
        && bytes.len() % 2 == 0
        && bytes
            .chunks(2)
            .all(|pair| pair[0].is_ascii_alphabetic() && pair[1] == b'.')
}

//! Public contract for language rules
//!
//! The classifier only ever talks to a language through this trait. Every
//! method is a table lookup; none of them allocate.

/// Information about an enclosure character (bracket, quote, etc.)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EnclosureInfo {
    /// Numeric ID of the pair this char belongs to (0-254)
    pub type_id: u8,
    /// +1 for opening, -1 for closing, 0 for symmetric quote
    pub delta: i8,
    /// true if identical char can mean both open/close (straight quote)
    pub symmetric: bool,
}

/// Language-specific rules for sentence boundary detection
pub trait LanguageRules: Send + Sync + 'static {
    // --- Hot-loop primitives ---

    /// O(1): is this a sentence terminator (`.`, `?`, `。`, ...)
    fn is_terminator_char(&self, ch: char) -> bool;

    /// Whether a line break outside any enclosure is a weak boundary
    fn breaks_on_newline(&self) -> bool;

    /// O(1): enclosure lookup; None if `ch` is not any bracket/quote
    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo>;

    /// O(1): may `ch` trail a terminator run as part of the same sentence
    fn is_trailing_char(&self, ch: char) -> bool;

    /// Whether a quote char should not count as an enclosure in this context
    fn suppresses_enclosure(
        &self,
        prev: Option<char>,
        ch: char,
        next: Option<char>,
        at_line_start: bool,
    ) -> bool;

    /// Whether suppression of `ch` depends on the following char
    fn needs_lookahead(&self, ch: char) -> bool;

    // --- Per-candidate helpers ---

    /// Whether `token` (trailing period already stripped) is an abbreviation
    fn is_abbreviation(&self, token: &str) -> bool;

    /// Whether `ch` alone is an ellipsis (`…`)
    fn is_ellipsis_char(&self, ch: char) -> bool;

    /// Whether `text` is nothing but ellipsis patterns
    fn is_bare_ellipsis(&self, text: &str) -> bool;

    /// Whether `1.` at line start is a list marker rather than a boundary
    fn detects_list_markers(&self) -> bool;

    // --- Metadata ---

    /// Language code (`en`, `ja`, ...)
    fn code(&self) -> &str;

    /// Human readable language name
    fn name(&self) -> &str;
}

//! Terminator lookup
//!
//! ASCII terminators live in a 128-bit mask; the few non-ASCII ones (CJK
//! full stops, `…`) in a sorted slice.

use crate::language::config::Terminators;

#[derive(Debug, Clone)]
pub struct TermTable {
    ascii_mask: u128,
    wide: Vec<char>,
    line_break: bool,
}

impl TermTable {
    pub fn new(terminators: &Terminators) -> Self {
        let mut ascii_mask = 0u128;
        let mut wide = Vec::new();

        for &ch in &terminators.chars {
            if ch.is_ascii() {
                ascii_mask |= 1u128 << (ch as u32);
            } else {
                wide.push(ch);
            }
        }
        wide.sort_unstable();
        wide.dedup();

        Self {
            ascii_mask,
            wide,
            line_break: terminators.line_break,
        }
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_mask & (1u128 << (ch as u32)) != 0
        } else {
            self.wide.binary_search(&ch).is_ok()
        }
    }

    /// Whether a single `\n` is a weak boundary
    #[inline]
    pub fn line_break(&self) -> bool {
        self.line_break
    }

    /// Distinct terminator chars
    pub fn count(&self) -> usize {
        self.ascii_mask.count_ones() as usize + self.wide.len()
    }
}

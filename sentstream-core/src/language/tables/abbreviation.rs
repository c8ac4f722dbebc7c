//! Abbreviation trie
//!
//! Compact trie for matching the word in front of a period against the
//! configured abbreviation categories. Zero allocations during lookup.

use std::collections::HashMap;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether this node marks end of abbreviation
    is_end: bool,
}

/// Abbreviation trie
///
/// Nodes live in contiguous storage; matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct Trie {
    /// All nodes in contiguous storage
    nodes: Vec<TrieNode>,
    /// Number of inserted entries
    len: usize,
}

impl Trie {
    /// Create empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Build from configuration categories
    pub fn from_categories(categories: &HashMap<String, Vec<String>>) -> Self {
        let mut trie = Self::new();

        for abbreviations in categories.values() {
            for abbr in abbreviations {
                // Entries are stored without their final period
                trie.insert(abbr.trim().trim_end_matches('.'));
            }
        }

        trie
    }

    /// Insert abbreviation into trie
    pub fn insert(&mut self, abbreviation: &str) {
        if abbreviation.is_empty() {
            return;
        }

        let mut current = 0usize;

        for ch in abbreviation.chars() {
            let ch = fold(ch);
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.is_end {
            node.is_end = true;
            self.len += 1;
        }
    }

    /// Check if the whole word is a known abbreviation
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = 0usize;
        for ch in word.chars() {
            match self.nodes[current].children.get(&fold(ch)) {
                Some(&child) => current = child as usize,
                None => return false,
            }
        }

        self.nodes[current].is_end
    }

    /// Number of abbreviations stored
    pub fn len(&self) -> usize {
        self.len
    }

}

#[inline]
fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

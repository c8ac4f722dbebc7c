//! Bracket and quote roles
//!
//! Every configured pair gets a `type_id` (its position in the config). An
//! opener has `delta = 1`, a closer `delta = -1`; both sides of a symmetric
//! quote share `delta = 0` and the nesting stack decides the direction.

use std::collections::{hash_map::Entry, HashMap, HashSet};

use tracing::warn;

use crate::language::{config::Enclosures, interface::EnclosureInfo};

#[derive(Debug, Clone)]
pub struct EncTable {
    roles: HashMap<char, EnclosureInfo>,
    /// Closers absorbed after a terminator run
    trailing: HashSet<char>,
    pair_count: usize,
}

impl EncTable {
    pub fn new(enclosures: &Enclosures) -> Self {
        let mut roles = HashMap::new();

        for (type_id, pair) in (0..=u8::MAX).zip(&enclosures.pairs) {
            let sides = if pair.symmetric {
                [(pair.open, 0), (pair.close, 0)]
            } else {
                [(pair.open, 1), (pair.close, -1)]
            };

            for (ch, delta) in sides {
                match roles.entry(ch) {
                    Entry::Vacant(slot) => {
                        slot.insert(EnclosureInfo {
                            type_id,
                            delta,
                            symmetric: pair.symmetric,
                        });
                    }
                    Entry::Occupied(existing) if existing.get().type_id != type_id => {
                        warn!(%ch, "enclosure char used by two pairs; keeping the first");
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        Self {
            pair_count: enclosures.pairs.len().min(usize::from(u8::MAX) + 1),
            roles,
            trailing: enclosures.trailing.iter().copied().collect(),
        }
    }

    #[inline]
    pub fn get(&self, ch: char) -> Option<EnclosureInfo> {
        self.roles.get(&ch).copied()
    }

    /// Whether `ch` may trail a terminator run (`."`, `?)`, `。」`)
    #[inline]
    pub fn is_trailing(&self, ch: char) -> bool {
        self.trailing.contains(&ch)
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }
}

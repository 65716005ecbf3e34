use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Per-item choice counts over the whole ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub item_id: ItemId,
    /// Times chosen least preferred.
    pub lowest: u64,
    /// Times chosen most preferred.
    pub highest: u64,
    /// `highest − lowest`.
    pub net: i64,
}

impl TallyEntry {
    pub fn new(item_id: ItemId, lowest: u64, highest: u64) -> Self {
        Self {
            item_id,
            lowest,
            highest,
            net: highest as i64 - lowest as i64,
        }
    }
}

/// Count table with one entry per catalog item, in id order. Items never
/// chosen report zero in all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

impl Tally {
    /// Build from entries already ordered by item id.
    pub fn new(entries: Vec<TallyEntry>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].item_id < w[1].item_id));
        Self { entries }
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    pub fn get(&self, item_id: ItemId) -> Option<&TallyEntry> {
        self.entries.iter().find(|e| e.item_id == item_id)
    }

    /// True when no item was ever chosen lowest or highest.
    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().all(|e| e.lowest == 0 && e.highest == 0)
    }
}

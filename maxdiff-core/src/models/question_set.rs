use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ItemId, ParticipantId};

/// The ordered k-item subset shown to one participant in one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    items: Vec<ItemId>,
}

impl QuestionSet {
    pub fn new(items: Vec<ItemId>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn get(&self, slot: usize) -> Option<ItemId> {
        self.items.get(slot).copied()
    }

    /// Overwrite `slot` with `id`, returning the displaced item.
    /// Used by the generator's repair passes.
    pub fn replace(&mut self, slot: usize, id: ItemId) -> ItemId {
        let displaced = self.items[slot];
        self.items[slot] = id;
        displaced
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }
}

/// Every participant's generated question sets, keyed by participant id.
///
/// Frozen at survey creation for a given (catalog, config) and never
/// mutated afterward.
pub type SurveyDesign = BTreeMap<ParticipantId, Vec<QuestionSet>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_a_bare_item_array() {
        let set = QuestionSet::new(vec![3, 1, 4]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[3,1,4]");

        let parsed: QuestionSet = serde_json::from_str("[3,1,4]").unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn replace_returns_the_displaced_item() {
        let mut set = QuestionSet::new(vec![3, 1, 4]);
        assert_eq!(set.replace(1, 9), 1);
        assert_eq!(set.items(), &[3, 9, 4]);
    }
}

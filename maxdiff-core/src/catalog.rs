use serde::{Deserialize, Serialize};

use crate::ItemId;

/// A single surveyed item: 1-based catalog id plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
}

/// Ordered, 1-indexed collection of survey items.
///
/// Ids are always `1..=len()` in insertion order. The catalog is immutable
/// once built; a survey's design refers to items by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Build a catalog from ordered labels, assigning ids `1..=n`.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Item {
                id: (i + 1) as ItemId,
                label: label.into(),
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> u32 {
        self.items.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        if id == 0 {
            return None;
        }
        self.items.get((id - 1) as usize)
    }

    /// Look up an item's label by id.
    pub fn label(&self, id: ItemId) -> Option<&str> {
        self.get(id).map(|item| item.label.as_str())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        id >= 1 && id <= self.len()
    }

    /// All item ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        1..=self.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

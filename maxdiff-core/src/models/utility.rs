use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Fitted utilities for every catalog item.
///
/// Coefficients are relative to `reference_item`, which is fixed at 0.0;
/// shares are the exponentiated, normalized coefficients and sum to 1.0
/// across all items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityReport {
    pub reference_item: ItemId,
    pub coefficients: BTreeMap<ItemId, f64>,
    pub shares: BTreeMap<ItemId, f64>,
}

impl UtilityReport {
    pub fn coefficient(&self, item_id: ItemId) -> Option<f64> {
        self.coefficients.get(&item_id).copied()
    }

    pub fn share(&self, item_id: ItemId) -> Option<f64> {
        self.shares.get(&item_id).copied()
    }

    /// Items ranked by share, most preferred first.
    pub fn ranking(&self) -> Vec<ItemId> {
        let mut ranked: Vec<_> = self.shares.iter().map(|(&id, &s)| (id, s)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.into_iter().map(|(id, _)| id).collect()
    }
}

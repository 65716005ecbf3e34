//! The main generation loop: `Q` rounds of target-capped sampling.

use rand::seq::SliceRandom;
use rand::Rng;

use maxdiff_core::{DesignConfig, ItemId, QuestionSet};

/// Generate `Q` sets of `k` items, keeping per-item appearance counts close
/// to `floor(Q·k / N)`.
///
/// Each round samples `k` items without replacement from the pool of items
/// still under the target count; when that pool is too small it is extended
/// with the least-used remaining items (ties broken by ascending id).
///
/// Returns the sets together with the final appearance counts, indexed by
/// `item_id - 1`. Counts may still contain zeros — the repair passes deal
/// with those.
pub fn generate_rounds(
    n_items: u32,
    config: &DesignConfig,
    rng: &mut impl Rng,
) -> (Vec<QuestionSet>, Vec<u32>) {
    let k = config.items_per_set as usize;
    let target = config.target_appearances(n_items);

    let mut counts = vec![0u32; n_items as usize];
    let mut sets = Vec::with_capacity(config.questions_per_participant as usize);

    for _ in 0..config.questions_per_participant {
        let mut pool: Vec<ItemId> = (1..=n_items)
            .filter(|&id| counts[(id - 1) as usize] < target)
            .collect();

        if pool.len() < k {
            let mut remaining: Vec<ItemId> = (1..=n_items)
                .filter(|id| !pool.contains(id))
                .collect();
            remaining.sort_by_key(|&id| (counts[(id - 1) as usize], id));
            let shortfall = k - pool.len();
            pool.extend(remaining.into_iter().take(shortfall));
        }

        let chosen: Vec<ItemId> = pool.choose_multiple(rng, k).copied().collect();
        for &id in &chosen {
            counts[(id - 1) as usize] += 1;
        }
        sets.push(QuestionSet::new(chosen));
    }

    (sets, counts)
}

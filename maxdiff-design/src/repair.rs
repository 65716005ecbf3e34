//! Post-loop repair passes: coverage floor and pairwise co-occurrence.
//!
//! These passes are part of the generation algorithm, not error recovery.
//! They may disturb the appearance balance the main loop achieved; that
//! imbalance is accepted and not corrected afterward.

use rand::seq::index;
use rand::Rng;
use tracing::{debug, warn};

use maxdiff_core::{ItemId, QuestionSet};

/// Maximum pairwise-repair sweeps before giving up. A forced injection can
/// displace the only appearance covering some other pair, so the pass is
/// re-run against the live sets until no pair is missing.
const MAX_PAIR_SWEEPS: usize = 64;

/// Inject every zero-appearance item into the globally least-loaded set,
/// overwriting a uniformly random slot. The displaced item's count is
/// decremented and the injected item's count incremented.
pub fn ensure_every_item_appears(
    sets: &mut [QuestionSet],
    counts: &mut [u32],
    rng: &mut impl Rng,
) {
    let k = sets.first().map_or(0, QuestionSet::len);
    let unused: Vec<ItemId> = counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == 0)
        .map(|(i, _)| (i + 1) as ItemId)
        .collect();

    for item in unused {
        // Least-loaded = smallest sum of member appearance counts,
        // recomputed after each injection.
        let set_index = (0..sets.len())
            .min_by_key(|&i| {
                sets[i]
                    .iter()
                    .map(|id| counts[(id - 1) as usize])
                    .sum::<u32>()
            })
            .expect("design has at least one set");

        let slot = rng.gen_range(0..k);
        let displaced = sets[set_index].replace(slot, item);
        counts[(displaced - 1) as usize] -= 1;
        counts[(item - 1) as usize] += 1;
        debug!(item, set_index, displaced, "injected zero-appearance item");
    }
}

/// All unordered item pairs not yet co-occurring in any set, in
/// lexicographic order.
pub fn missing_pairs(sets: &[QuestionSet], n_items: u32) -> Vec<(ItemId, ItemId)> {
    let n = n_items as usize;
    let mut covered = vec![false; n * n];
    for set in sets {
        let items = set.items();
        for (i, &a) in items.iter().enumerate() {
            for &b in &items[i + 1..] {
                let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                covered[(lo - 1) as usize * n + (hi - 1) as usize] = true;
            }
        }
    }

    let mut missing = Vec::new();
    for a in 1..=n_items {
        for b in (a + 1)..=n_items {
            if !covered[(a - 1) as usize * n + (b - 1) as usize] {
                missing.push((a, b));
            }
        }
    }
    missing
}

/// Force every missing pair to co-occur in some set.
///
/// For each missing pair, the first set containing one endpoint gets the
/// other forced into a random slot (never the slot holding the present
/// endpoint); when neither endpoint appears anywhere, a uniformly random
/// set gets both endpoints at two distinct random slots. Appearance counts
/// are not rechecked against the target — the imbalance this introduces is
/// accepted.
///
/// The pass runs against a frozen snapshot of missing pairs, then re-scans
/// the live sets and repeats until nothing is missing (bounded by
/// [`MAX_PAIR_SWEEPS`]). Returns the number of forced injections.
pub fn cover_missing_pairs(
    sets: &mut [QuestionSet],
    n_items: u32,
    rng: &mut impl Rng,
) -> usize {
    let k = sets.first().map_or(0, QuestionSet::len);
    let mut injections = 0;

    for _sweep in 0..MAX_PAIR_SWEEPS {
        let missing = missing_pairs(sets, n_items);
        if missing.is_empty() {
            return injections;
        }

        for (a, b) in missing {
            match sets.iter().position(|s| s.contains(a) || s.contains(b)) {
                Some(set_index) => {
                    let set = &mut sets[set_index];
                    let absent = if !set.contains(a) {
                        Some(a)
                    } else if !set.contains(b) {
                        Some(b)
                    } else {
                        // Already covered by an earlier injection this sweep.
                        None
                    };
                    if let Some(item) = absent {
                        let present = if item == a { b } else { a };
                        let slot = random_slot_avoiding(set, present, k, rng);
                        set.replace(slot, item);
                        injections += 1;
                        debug!(a, b, set_index, "forced missing pair endpoint");
                    }
                }
                None => {
                    // Neither endpoint survives anywhere: overwrite two
                    // distinct slots of a random set with both.
                    let set_index = rng.gen_range(0..sets.len());
                    let slots = index::sample(rng, k, 2);
                    sets[set_index].replace(slots.index(0), a);
                    sets[set_index].replace(slots.index(1), b);
                    injections += 2;
                    debug!(a, b, set_index, "reinserted vanished pair");
                }
            }
        }
    }

    let leftover = missing_pairs(sets, n_items).len();
    if leftover > 0 {
        warn!(
            leftover,
            "pairwise repair did not converge; design leaves pairs uncovered"
        );
    }
    injections
}

/// Uniformly random slot whose current occupant is not `keep`.
fn random_slot_avoiding(
    set: &QuestionSet,
    keep: ItemId,
    k: usize,
    rng: &mut impl Rng,
) -> usize {
    let candidates: Vec<usize> = (0..k).filter(|&i| set.get(i) != Some(keep)).collect();
    candidates[rng.gen_range(0..candidates.len())]
}

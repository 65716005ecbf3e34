use proptest::prelude::*;

use maxdiff_core::{DesignConfig, ItemCatalog};
use maxdiff_design::{repair, rounds, stream, DesignEngine};

fn catalog_of(n: u32) -> ItemCatalog {
    ItemCatalog::from_labels((1..=n).map(|i| format!("item {i}")))
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generation_is_deterministic(
        n in 6u32..=10,
        k in 2u32..=4,
        q in 4u32..=12,
        seed in any::<u64>(),
        participant_id in 1u32..=4,
    ) {
        let catalog = catalog_of(n);
        let config = DesignConfig {
            items_per_set: k,
            questions_per_participant: q,
            participants: 4,
            seed,
        };
        let engine = DesignEngine::new(config);

        let first = engine.generate_for_participant(&catalog, participant_id).unwrap();
        let second = engine.generate_for_participant(&catalog, participant_id).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── Coverage ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_item_and_pair_is_covered(
        n in 5u32..=7,
        k in 3u32..=4,
        q in 10u32..=14,
        seed in any::<u64>(),
    ) {
        let catalog = catalog_of(n);
        let config = DesignConfig {
            items_per_set: k,
            questions_per_participant: q,
            participants: 1,
            seed,
        };
        let sets = DesignEngine::new(config)
            .generate_for_participant(&catalog, 1)
            .unwrap();

        prop_assert_eq!(sets.len(), q as usize);
        for set in &sets {
            prop_assert_eq!(set.len(), k as usize);
        }
        for id in 1..=n {
            prop_assert!(
                sets.iter().any(|s| s.contains(id)),
                "item {} never appears", id
            );
        }
        prop_assert!(
            repair::missing_pairs(&sets, n).is_empty(),
            "uncovered pairs remain"
        );
    }
}

// ── Balance before repair ────────────────────────────────────────────────

proptest! {
    #[test]
    fn round_counts_stay_near_target(
        n in 5u32..=12,
        k in 2u32..=5,
        q in 1u32..=15,
        seed in any::<u64>(),
    ) {
        prop_assume!(k <= n);
        let config = DesignConfig {
            items_per_set: k,
            questions_per_participant: q,
            participants: 1,
            seed,
        };
        let target = config.target_appearances(n);

        let mut rng = stream::participant_stream(seed, 1);
        let (sets, counts) = rounds::generate_rounds(n, &config, &mut rng);

        prop_assert_eq!(sets.len(), q as usize);
        prop_assert_eq!(counts.iter().sum::<u32>(), q * k);
        for (i, &count) in counts.iter().enumerate() {
            prop_assert!(
                count <= target + k,
                "item {} appears {} times, target {}", i + 1, count, target
            );
        }
    }
}

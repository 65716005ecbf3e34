//! Shared test builders for the MaxDiff workspace: sample catalogs,
//! deterministic answering patterns, and stub estimators.

use maxdiff_core::{
    ChoiceDesignMatrix, DesignConfig, EstimationError, IUtilityEstimator, ItemCatalog,
    MaxDiffResult,
};
use maxdiff_design::DesignEngine;
use maxdiff_ledger::ResponseLedger;

/// The eleven-fruit catalog used across integration tests.
pub fn fruit_catalog() -> ItemCatalog {
    ItemCatalog::from_labels([
        "apples",
        "bananas",
        "pears",
        "peaches",
        "cherries",
        "grapes",
        "lemons",
        "oranges",
        "melons",
        "blueberries",
        "raspberries",
    ])
}

/// A numbered catalog of `n` items.
pub fn numbered_catalog(n: u32) -> ItemCatalog {
    ItemCatalog::from_labels((1..=n).map(|i| format!("item {i}")))
}

/// A small, quickly generated design configuration.
pub fn small_config(participants: u32, seed: u64) -> DesignConfig {
    DesignConfig {
        items_per_set: 3,
        questions_per_participant: 8,
        participants,
        seed,
    }
}

/// Generate a design and an empty ledger for it.
pub fn fresh_ledger(catalog: &ItemCatalog, config: DesignConfig) -> MaxDiffResult<ResponseLedger> {
    let design = DesignEngine::new(config).generate_all(catalog)?;
    Ok(ResponseLedger::initialize(&design))
}

/// Answer every cell deterministically: the i-th row (in ledger order)
/// takes slot `i % k` as lowest and slot `(i + 1) % k` as highest.
pub fn answer_round_robin(ledger: &mut ResponseLedger) {
    let cells: Vec<_> = ledger
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let k = row.set.len();
            let lowest = row.set.get(i % k).expect("slot in range");
            let highest = row.set.get((i + 1) % k).expect("slot in range");
            (row.participant_id, row.question_number, lowest, highest)
        })
        .collect();
    for (participant_id, question_number, lowest, highest) in cells {
        ledger
            .record_response(participant_id, question_number, lowest, highest)
            .expect("round-robin answers are always valid");
    }
}

/// Estimator stub returning a fixed coefficient vector.
pub struct FixedCoefficientEstimator {
    pub coefficients: Vec<f64>,
}

impl IUtilityEstimator for FixedCoefficientEstimator {
    fn estimate(&self, _matrix: &ChoiceDesignMatrix) -> Result<Vec<f64>, EstimationError> {
        Ok(self.coefficients.clone())
    }

    fn name(&self) -> &str {
        "fixed-coefficients"
    }
}

/// Estimator stub that always fails to converge.
pub struct FailingEstimator;

impl IUtilityEstimator for FailingEstimator {
    fn estimate(&self, _matrix: &ChoiceDesignMatrix) -> Result<Vec<f64>, EstimationError> {
        Err(EstimationError::FitFailed {
            estimator: self.name().to_string(),
            reason: "maximum iterations reached without convergence".to_string(),
        })
    }

    fn name(&self) -> &str {
        "always-failing"
    }
}

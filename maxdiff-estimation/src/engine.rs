use tracing::info;

use maxdiff_core::{
    EstimationError, IUtilityEstimator, ItemCatalog, MaxDiffResult, UtilityReport,
};
use maxdiff_ledger::ResponseLedger;

use crate::{design_matrix, shares};

/// Drives one pluggable estimator against the current ledger state.
pub struct EstimationEngine {
    estimator: Box<dyn IUtilityEstimator>,
}

impl EstimationEngine {
    pub fn new(estimator: Box<dyn IUtilityEstimator>) -> Self {
        Self { estimator }
    }

    pub fn estimator_name(&self) -> &str {
        self.estimator.name()
    }

    /// Estimate per-item utilities from every answered cell.
    ///
    /// Prechecks the design matrix before invoking the estimator: an empty
    /// matrix and an item never chosen highest anywhere are both fit
    /// failures the solver could only discover later (rank deficiency), so
    /// they are reported up front. The ledger is never modified.
    pub fn estimate(
        &self,
        ledger: &ResponseLedger,
        catalog: &ItemCatalog,
    ) -> MaxDiffResult<UtilityReport> {
        let matrix = design_matrix::build(ledger, catalog);
        if matrix.is_empty() {
            return Err(EstimationError::NoResponses.into());
        }

        for item_id in catalog.ids() {
            let ever_highest = matrix
                .rows
                .iter()
                .any(|row| row.item_id == item_id && row.chose_highest == 1);
            if !ever_highest {
                return Err(EstimationError::RankDeficient { item_id }.into());
            }
        }

        let coefficients = self.estimator.estimate(&matrix)?;
        if coefficients.len() != matrix.coefficient_items.len() {
            return Err(EstimationError::CoefficientCountMismatch {
                estimator: self.estimator.name().to_string(),
                expected: matrix.coefficient_items.len(),
                got: coefficients.len(),
            }
            .into());
        }

        let report = shares::build_report(&matrix, &coefficients);
        info!(
            estimator = self.estimator.name(),
            rows = matrix.len(),
            groups = matrix.group_count(),
            "estimated utilities"
        );
        Ok(report)
    }
}

//! Coefficient → utility-share rescaling.

use std::collections::BTreeMap;

use maxdiff_core::{ChoiceDesignMatrix, UtilityReport};

/// Fix the reference item at coefficient 0, exponentiate, and normalize
/// into shares summing to 1 across all items.
pub fn build_report(matrix: &ChoiceDesignMatrix, coefficients: &[f64]) -> UtilityReport {
    debug_assert_eq!(coefficients.len(), matrix.coefficient_items.len());

    let mut full: BTreeMap<_, _> = matrix
        .coefficient_items
        .iter()
        .copied()
        .zip(coefficients.iter().copied())
        .collect();
    full.insert(matrix.reference_item, 0.0);

    let sum_exp: f64 = full.values().map(|c| c.exp()).sum();
    let shares = full
        .iter()
        .map(|(&id, &c)| (id, c.exp() / sum_exp))
        .collect();

    UtilityReport {
        reference_item: matrix.reference_item,
        coefficients: full,
        shares,
    }
}

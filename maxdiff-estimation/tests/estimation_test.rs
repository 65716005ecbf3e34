use std::collections::BTreeMap;

use maxdiff_core::{EstimationError, MaxDiffError, QuestionSet, SurveyDesign};
use maxdiff_estimation::{design_matrix, EstimationEngine};
use maxdiff_ledger::ResponseLedger;
use test_fixtures::{
    answer_round_robin, fresh_ledger, fruit_catalog, numbered_catalog, small_config,
    FailingEstimator, FixedCoefficientEstimator,
};

/// One participant, six paired comparisons over four items.
fn paired_design() -> SurveyDesign {
    let pairs = [[1, 2], [2, 3], [3, 4], [4, 1], [1, 3], [2, 4]];
    let mut design = BTreeMap::new();
    design.insert(
        1,
        pairs
            .into_iter()
            .map(|p| QuestionSet::new(p.to_vec()))
            .collect(),
    );
    design
}

/// Answer so that every item is chosen highest at least once.
fn full_rank_ledger() -> ResponseLedger {
    let mut ledger = ResponseLedger::initialize(&paired_design());
    ledger.record_response(1, 1, 1, 2).unwrap();
    ledger.record_response(1, 2, 2, 3).unwrap();
    ledger.record_response(1, 3, 3, 4).unwrap();
    ledger.record_response(1, 4, 4, 1).unwrap();
    ledger.record_response(1, 5, 3, 1).unwrap();
    ledger.record_response(1, 6, 4, 2).unwrap();
    ledger
}

// ── Design matrix extraction ─────────────────────────────────────────────

#[test]
fn matrix_has_one_row_per_item_in_answered_question() {
    let catalog = numbered_catalog(4);
    let ledger = full_rank_ledger();
    let matrix = design_matrix::build(&ledger, &catalog);

    assert_eq!(matrix.len(), 12);
    assert_eq!(matrix.group_count(), 6);
    assert_eq!(matrix.reference_item, 1);
    assert_eq!(matrix.coefficient_items, vec![2, 3, 4]);

    // Exactly one highest pick per choice context; lowest picks fold to 0.
    let mut per_group = BTreeMap::new();
    for row in &matrix.rows {
        assert!(row.chose_highest <= 1);
        *per_group.entry(row.group()).or_insert(0u32) += u32::from(row.chose_highest);
    }
    assert!(per_group.values().all(|&highs| highs == 1));
}

#[test]
fn generated_design_yields_a_matrix_covering_every_answered_cell() {
    let catalog = fruit_catalog();
    let mut ledger = fresh_ledger(&catalog, small_config(2, 9)).unwrap();
    answer_round_robin(&mut ledger);

    let matrix = design_matrix::build(&ledger, &catalog);
    // 2 participants × 8 questions × 3 items per set.
    assert_eq!(matrix.len(), 48);
    assert_eq!(matrix.group_count(), 16);
    assert_eq!(matrix.coefficient_items.len(), 10);
}

#[test]
fn unanswered_cells_are_excluded_from_the_matrix() {
    let catalog = numbered_catalog(4);
    let mut ledger = ResponseLedger::initialize(&paired_design());
    ledger.record_response(1, 1, 1, 2).unwrap();
    ledger.record_response(1, 4, 4, 1).unwrap();

    let matrix = design_matrix::build(&ledger, &catalog);
    assert_eq!(matrix.len(), 4);
    assert_eq!(matrix.group_count(), 2);
}

// ── Prechecks ────────────────────────────────────────────────────────────

#[test]
fn empty_ledger_reports_no_responses() {
    let catalog = numbered_catalog(4);
    let ledger = ResponseLedger::initialize(&paired_design());
    let engine = EstimationEngine::new(Box::new(FixedCoefficientEstimator {
        coefficients: vec![0.0; 3],
    }));

    let err = engine.estimate(&ledger, &catalog).unwrap_err();
    assert!(matches!(
        err,
        MaxDiffError::Estimation(EstimationError::NoResponses)
    ));
}

#[test]
fn item_never_chosen_highest_is_rank_deficient() {
    let catalog = numbered_catalog(4);
    let mut ledger = ResponseLedger::initialize(&paired_design());
    // Item 4 is always the lowest of its pair, never the highest.
    ledger.record_response(1, 1, 1, 2).unwrap();
    ledger.record_response(1, 2, 2, 3).unwrap();
    ledger.record_response(1, 3, 4, 3).unwrap();
    ledger.record_response(1, 4, 4, 1).unwrap();
    ledger.record_response(1, 5, 3, 1).unwrap();
    ledger.record_response(1, 6, 4, 2).unwrap();

    let engine = EstimationEngine::new(Box::new(FixedCoefficientEstimator {
        coefficients: vec![0.0; 3],
    }));
    let err = engine.estimate(&ledger, &catalog).unwrap_err();
    assert!(matches!(
        err,
        MaxDiffError::Estimation(EstimationError::RankDeficient { item_id: 4 })
    ));
}

// ── Estimator failures surface verbatim ──────────────────────────────────

#[test]
fn fit_failure_propagates_unchanged() {
    let catalog = numbered_catalog(4);
    let ledger = full_rank_ledger();
    let engine = EstimationEngine::new(Box::new(FailingEstimator));

    let err = engine.estimate(&ledger, &catalog).unwrap_err();
    assert!(matches!(
        err,
        MaxDiffError::Estimation(EstimationError::FitFailed { .. })
    ));
}

#[test]
fn wrong_coefficient_count_is_rejected() {
    let catalog = numbered_catalog(4);
    let ledger = full_rank_ledger();
    let engine = EstimationEngine::new(Box::new(FixedCoefficientEstimator {
        coefficients: vec![0.1, 0.2],
    }));

    let err = engine.estimate(&ledger, &catalog).unwrap_err();
    assert!(matches!(
        err,
        MaxDiffError::Estimation(EstimationError::CoefficientCountMismatch {
            expected: 3,
            got: 2,
            ..
        })
    ));
}

// ── Share rescaling ──────────────────────────────────────────────────────

#[test]
fn report_fixes_reference_at_zero_and_shares_sum_to_one() {
    let catalog = numbered_catalog(4);
    let ledger = full_rank_ledger();
    let engine = EstimationEngine::new(Box::new(FixedCoefficientEstimator {
        coefficients: vec![0.5, -0.2, 0.1],
    }));

    let report = engine.estimate(&ledger, &catalog).unwrap();

    assert_eq!(report.reference_item, 1);
    assert_eq!(report.coefficient(1), Some(0.0));
    assert_eq!(report.coefficient(2), Some(0.5));
    assert_eq!(report.coefficient(3), Some(-0.2));

    let total: f64 = (1..=4).map(|id| report.share(id).unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-12);

    // Higher coefficient, higher share; ranking follows.
    assert!(report.share(2).unwrap() > report.share(1).unwrap());
    assert!(report.share(1).unwrap() > report.share(3).unwrap());
    assert_eq!(report.ranking(), vec![2, 4, 1, 3]);
}

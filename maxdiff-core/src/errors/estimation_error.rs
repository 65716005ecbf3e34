use crate::ItemId;

/// Statistical fit failure. Surfaced verbatim to the caller; utilities stay
/// absent and the ledger is untouched. The caller may retry after
/// collecting more responses.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("ledger contains no responses")]
    NoResponses,

    #[error("item {item_id} was never chosen highest; the design matrix is rank deficient")]
    RankDeficient { item_id: ItemId },

    #[error("estimator '{estimator}' failed: {reason}")]
    FitFailed { estimator: String, reason: String },

    #[error("estimator '{estimator}' returned {got} coefficients, expected {expected}")]
    CoefficientCountMismatch {
        estimator: String,
        expected: usize,
        got: usize,
    },
}

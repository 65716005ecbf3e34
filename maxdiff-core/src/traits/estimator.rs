use crate::errors::EstimationError;
use crate::models::ChoiceDesignMatrix;

/// Pluggable utility estimator (conditional/grouped logit or equivalent).
///
/// Implementations consume a prepared [`ChoiceDesignMatrix`] and return one
/// coefficient per entry of `matrix.coefficient_items`, in order. The
/// reference item is not estimated; the caller fixes it at 0.0 and rescales
/// the full vector into utility shares.
pub trait IUtilityEstimator: Send + Sync {
    /// Fit the model. May fail to converge, or fail outright on a
    /// rank-deficient design; either surfaces as an [`EstimationError`].
    fn estimate(&self, matrix: &ChoiceDesignMatrix) -> Result<Vec<f64>, EstimationError>;

    /// Human-readable estimator name.
    fn name(&self) -> &str;
}

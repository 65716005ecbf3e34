//! Error taxonomy for the MaxDiff engine.
//!
//! Four domains: configuration (fatal at generation time), response
//! validation (recoverable, ledger unchanged on failure), not-found
//! (programmer error), and estimation (surfaced verbatim, never defaulted).

mod config_error;
mod estimation_error;
mod ledger_error;

pub use config_error::ConfigurationError;
pub use estimation_error::EstimationError;
pub use ledger_error::{NotFoundError, ValidationError};

/// Umbrella error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum MaxDiffError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Estimation(#[from] EstimationError),
}

/// Convenience alias used throughout the workspace.
pub type MaxDiffResult<T> = Result<T, MaxDiffError>;

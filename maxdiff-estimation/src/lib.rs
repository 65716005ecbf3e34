//! # maxdiff-estimation
//!
//! Glue around the pluggable utility estimator: turns the response ledger
//! into a choice design matrix, prechecks it for rank deficiency, hands it
//! to an [`maxdiff_core::IUtilityEstimator`], and rescales the returned
//! coefficients into utility shares summing to 1.
//!
//! The statistical fit itself is an external capability — this crate never
//! hard-wires a solver, and a failed fit surfaces verbatim as an
//! `EstimationError` rather than defaulting to zero utilities.

pub mod design_matrix;
pub mod engine;
pub mod shares;

pub use engine::EstimationEngine;

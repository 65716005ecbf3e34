mod estimator;

pub use estimator::IUtilityEstimator;

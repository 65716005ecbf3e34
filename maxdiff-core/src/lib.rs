//! # maxdiff-core
//!
//! Foundation crate for the MaxDiff (best-worst scaling) survey engine.
//! Defines all types, models, errors, config, and traits.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

/// 1-based catalog index of an item.
pub type ItemId = u32;

/// 1-based participant number, in `1..=participants`.
pub type ParticipantId = u32;

/// 1-based question number within a participant's sequence.
pub type QuestionNumber = u32;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Item, ItemCatalog};
pub use config::DesignConfig;
pub use errors::{
    ConfigurationError, EstimationError, MaxDiffError, MaxDiffResult, NotFoundError,
    ValidationError,
};
pub use models::{
    ChoiceDesignMatrix, ChoiceRow, LedgerRow, QuestionSet, Response, SurveyDesign, Tally,
    TallyEntry, UtilityReport,
};
pub use traits::IUtilityEstimator;

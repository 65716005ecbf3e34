//! # maxdiff-survey
//!
//! The survey session object: one explicit value owning the item catalog,
//! design parameters, generated question sets, and response ledger for a
//! running survey. Operations take the survey by reference — there is no
//! process-wide survey state anywhere in the workspace.

pub mod builder;
pub mod survey;

pub use builder::SurveyBuilder;
pub use survey::Survey;

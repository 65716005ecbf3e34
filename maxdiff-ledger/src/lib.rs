//! # maxdiff-ledger
//!
//! The response ledger for a running survey: exactly one row per
//! (participant, question) cell, each holding the assigned question set and
//! an optional (lowest, highest) response pair.
//!
//! Every write is validated — equal ids and ids outside the cell's set are
//! rejected with the ledger unchanged. Rows mutate in place; the ledger
//! performs no I/O and assumes a single logical writer.

pub mod export;
pub mod ledger;

pub use export::export_rows;
pub use ledger::ResponseLedger;

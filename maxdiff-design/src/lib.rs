//! # maxdiff-design
//!
//! Balanced question-set generation for best-worst surveys.
//!
//! For each participant the engine assigns catalog items into `Q` sets of
//! `k`, targeting `floor(Q·k / N)` appearances per item, then repairs the
//! result so every item appears at least once and every unordered item pair
//! co-occurs in at least one set.
//!
//! Generation is a pure function of (catalog, config, participant): each
//! participant draws from an independent stream derived from the master
//! seed, so identical inputs reproduce identical designs byte-for-byte and
//! participants never share generator state.

pub mod engine;
pub mod repair;
pub mod rounds;
pub mod stream;

pub use engine::DesignEngine;

/// MaxDiff engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard lower bound on set size — a best-worst choice needs two distinct items.
pub const MIN_ITEMS_PER_SET: u32 = 2;

/// Recommended set-size range for real surveys. Callers enforce this as
/// policy; the core only requires `MIN_ITEMS_PER_SET`.
pub const RECOMMENDED_MIN_SET_SIZE: u32 = 3;
pub const RECOMMENDED_MAX_SET_SIZE: u32 = 6;

/// Recommended catalog-size range. Caller policy, never enforced here.
pub const RECOMMENDED_MIN_ITEMS: u32 = 6;
pub const RECOMMENDED_MAX_ITEMS: u32 = 30;

/// Default design parameters.
pub const DEFAULT_ITEMS_PER_SET: u32 = 4;
pub const DEFAULT_QUESTIONS_PER_PARTICIPANT: u32 = 10;
pub const DEFAULT_PARTICIPANTS: u32 = 1;
pub const DEFAULT_SEED: u64 = 42;

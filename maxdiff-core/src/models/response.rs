use serde::{Deserialize, Serialize};

use crate::ItemId;

/// A captured best-worst choice for one ledger cell.
///
/// Both ids are distinct members of the cell's question set; the ledger
/// enforces this on every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Item chosen as least preferred.
    pub lowest: ItemId,
    /// Item chosen as most preferred.
    pub highest: ItemId,
}

//! Ledger → choice design matrix extraction.

use maxdiff_core::{ChoiceDesignMatrix, ChoiceRow, ItemCatalog};
use maxdiff_ledger::ResponseLedger;

/// Build the estimator input from every answered cell.
///
/// One row per (participant, question, item-in-that-question) triple.
/// `chose_highest` is 1 only for the item picked most preferred; the
/// lowest pick is folded into 0 rather than kept as −1. The reference item
/// is catalog item 1 and is omitted from `coefficient_items`, mirroring a
/// dropped dummy column.
pub fn build(ledger: &ResponseLedger, catalog: &ItemCatalog) -> ChoiceDesignMatrix {
    let mut rows = Vec::new();
    for row in ledger.rows() {
        let Some(response) = row.response else {
            continue;
        };
        for item_id in row.set.iter() {
            rows.push(ChoiceRow {
                participant_id: row.participant_id,
                question_number: row.question_number,
                item_id,
                chose_highest: u8::from(item_id == response.highest),
            });
        }
    }

    ChoiceDesignMatrix {
        reference_item: 1,
        coefficient_items: catalog.ids().skip(1).collect(),
        rows,
    }
}

use serde::{Deserialize, Serialize};

use crate::{ItemId, ParticipantId, QuestionNumber};

/// One row of the choice design matrix: a single (participant, question,
/// item-in-that-question) triple.
///
/// `chose_highest` is 1 iff the item was picked most preferred in that
/// question; lowest picks are folded into 0 for estimation. The pair
/// (`participant_id`, `question_number`) is the grouping key marking the
/// choice context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRow {
    pub participant_id: ParticipantId,
    pub question_number: QuestionNumber,
    pub item_id: ItemId,
    pub chose_highest: u8,
}

impl ChoiceRow {
    /// The choice-context grouping key.
    pub fn group(&self) -> (ParticipantId, QuestionNumber) {
        (self.participant_id, self.question_number)
    }
}

/// Prepared input for a conditional-logit style estimator.
///
/// `coefficient_items` lists, in id order, every catalog item except the
/// reference item; an estimator returns exactly one coefficient per entry,
/// and the reference item is fixed at coefficient 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDesignMatrix {
    pub reference_item: ItemId,
    pub coefficient_items: Vec<ItemId>,
    pub rows: Vec<ChoiceRow>,
}

impl ChoiceDesignMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct choice contexts.
    pub fn group_count(&self) -> usize {
        let mut groups: Vec<_> = self.rows.iter().map(ChoiceRow::group).collect();
        groups.sort_unstable();
        groups.dedup();
        groups.len()
    }
}

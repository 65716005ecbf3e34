use serde::{Deserialize, Serialize};

use crate::models::{QuestionSet, Response};
use crate::{ParticipantId, QuestionNumber};

/// One ledger cell: the set assigned to (participant, question) plus the
/// optional captured response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub participant_id: ParticipantId,
    pub question_number: QuestionNumber,
    pub set: QuestionSet,
    pub response: Option<Response>,
}

impl LedgerRow {
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }
}

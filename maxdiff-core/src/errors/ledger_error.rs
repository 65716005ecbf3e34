use crate::{ItemId, ParticipantId, QuestionNumber};

/// Invalid response content. Recoverable: the caller re-prompts or discards
/// the attempted write; the ledger cell is unchanged on failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("lowest and highest must differ, both were item {item_id}")]
    IdenticalChoices { item_id: ItemId },

    #[error(
        "item {item_id} is not in the set for participant {participant_id}, \
         question {question_number}"
    )]
    ItemNotInSet {
        participant_id: ParticipantId,
        question_number: QuestionNumber,
        item_id: ItemId,
    },
}

/// Reference to a participant or question outside the declared design.
/// Treated as programmer error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("participant {participant_id} not found")]
    Participant { participant_id: ParticipantId },

    #[error("question {question_number} out of range for participant {participant_id}")]
    Question {
        participant_id: ParticipantId,
        question_number: QuestionNumber,
    },
}

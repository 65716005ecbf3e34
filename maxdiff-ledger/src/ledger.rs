use std::collections::BTreeMap;

use rand::seq::index;
use tracing::{debug, info};

use maxdiff_core::{
    ItemCatalog, ItemId, LedgerRow, MaxDiffResult, NotFoundError, ParticipantId, QuestionNumber,
    Response, SurveyDesign, Tally, TallyEntry, ValidationError,
};

/// One row per (participant, question), populated from the survey design.
///
/// The row structure is fixed at initialization — always exactly P·Q rows,
/// regardless of how many responses have been captured. Responses are the
/// only mutable part.
#[derive(Debug, Clone)]
pub struct ResponseLedger {
    questions_per_participant: u32,
    rows: BTreeMap<(ParticipantId, QuestionNumber), LedgerRow>,
}

impl ResponseLedger {
    /// Build an empty ledger from a generated design: every cell gets its
    /// question set, lowest/highest start null.
    pub fn initialize(design: &SurveyDesign) -> Self {
        let questions_per_participant = design
            .values()
            .next()
            .map_or(0, |sets| sets.len() as u32);
        debug_assert!(design
            .values()
            .all(|sets| sets.len() as u32 == questions_per_participant));

        let mut rows = BTreeMap::new();
        for (&participant_id, sets) in design {
            for (i, set) in sets.iter().enumerate() {
                let question_number = (i + 1) as QuestionNumber;
                rows.insert(
                    (participant_id, question_number),
                    LedgerRow {
                        participant_id,
                        question_number,
                        set: set.clone(),
                        response: None,
                    },
                );
            }
        }

        info!(rows = rows.len(), "initialized response ledger");
        Self {
            questions_per_participant,
            rows,
        }
    }

    pub fn questions_per_participant(&self) -> u32 {
        self.questions_per_participant
    }

    pub fn participant_count(&self) -> u32 {
        self.rows
            .keys()
            .map(|&(p, _)| p)
            .collect::<std::collections::BTreeSet<_>>()
            .len() as u32
    }

    /// Total number of cells (always P·Q).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in (participant, question) order.
    pub fn rows(&self) -> impl Iterator<Item = &LedgerRow> {
        self.rows.values()
    }

    pub fn row(
        &self,
        participant_id: ParticipantId,
        question_number: QuestionNumber,
    ) -> Option<&LedgerRow> {
        self.rows.get(&(participant_id, question_number))
    }

    fn require_cell(
        &mut self,
        participant_id: ParticipantId,
        question_number: QuestionNumber,
    ) -> Result<&mut LedgerRow, NotFoundError> {
        if !self.rows.contains_key(&(participant_id, 1)) {
            return Err(NotFoundError::Participant { participant_id });
        }
        self.rows
            .get_mut(&(participant_id, question_number))
            .ok_or(NotFoundError::Question {
                participant_id,
                question_number,
            })
    }

    /// Capture a response for one cell, overwriting any earlier one.
    ///
    /// Fails with `NotFoundError` for an out-of-range participant/question
    /// and `ValidationError` for equal ids or ids outside the cell's set;
    /// the cell is unchanged on failure.
    pub fn record_response(
        &mut self,
        participant_id: ParticipantId,
        question_number: QuestionNumber,
        lowest: ItemId,
        highest: ItemId,
    ) -> MaxDiffResult<()> {
        let row = self.require_cell(participant_id, question_number)?;

        if lowest == highest {
            return Err(ValidationError::IdenticalChoices { item_id: lowest }.into());
        }
        for item_id in [lowest, highest] {
            if !row.set.contains(item_id) {
                return Err(ValidationError::ItemNotInSet {
                    participant_id,
                    question_number,
                    item_id,
                }
                .into());
            }
        }

        row.response = Some(Response { lowest, highest });
        debug!(
            participant_id,
            question_number, lowest, highest, "recorded response"
        );
        Ok(())
    }

    /// Fill unanswered cells (or every cell, when `overwrite`) with two
    /// distinct uniform draws from each cell's set.
    ///
    /// Uses the process-level random source, never reseeded — synthetic
    /// responses are intentionally non-deterministic, unlike set generation.
    pub fn generate_random_responses(&mut self, overwrite: bool) {
        let mut rng = rand::thread_rng();
        let mut filled = 0usize;

        for row in self.rows.values_mut() {
            if row.response.is_some() && !overwrite {
                continue;
            }
            let picked = index::sample(&mut rng, row.set.len(), 2);
            row.response = Some(Response {
                lowest: row.set.get(picked.index(0)).expect("slot in range"),
                highest: row.set.get(picked.index(1)).expect("slot in range"),
            });
            filled += 1;
        }

        info!(filled, overwrite, "generated random responses");
    }

    /// Reset every response to null. Question sets and row structure are
    /// untouched.
    pub fn clear_all(&mut self) {
        for row in self.rows.values_mut() {
            row.response = None;
        }
        info!("cleared all responses");
    }

    /// Number of answered questions for one participant.
    pub fn completion_count(&self, participant_id: ParticipantId) -> MaxDiffResult<u32> {
        if !self.rows.contains_key(&(participant_id, 1)) {
            return Err(NotFoundError::Participant { participant_id }.into());
        }
        Ok(self
            .rows
            .range((participant_id, 1)..=(participant_id, self.questions_per_participant))
            .filter(|(_, row)| row.is_answered())
            .count() as u32)
    }

    /// True when every cell has a response.
    pub fn is_complete(&self) -> bool {
        self.rows.values().all(LedgerRow::is_answered)
    }

    /// Per-item lowest/highest/net counts. Items never chosen report zero
    /// in all fields.
    pub fn tally(&self, catalog: &ItemCatalog) -> Tally {
        let n = catalog.len() as usize;
        let mut lowest = vec![0u64; n];
        let mut highest = vec![0u64; n];

        for row in self.rows.values() {
            let Some(response) = row.response else { continue };
            // Ids past the catalog (a foreign catalog was passed in) are
            // skipped rather than miscounted or panicking.
            if let Some(slot) = lowest.get_mut((response.lowest - 1) as usize) {
                *slot += 1;
            }
            if let Some(slot) = highest.get_mut((response.highest - 1) as usize) {
                *slot += 1;
            }
        }

        let entries = catalog
            .ids()
            .map(|id| TallyEntry::new(id, lowest[(id - 1) as usize], highest[(id - 1) as usize]))
            .collect();
        Tally::new(entries)
    }
}

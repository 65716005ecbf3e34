use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use maxdiff_core::{
    DesignConfig, IUtilityEstimator, ItemCatalog, ItemId, MaxDiffResult, ParticipantId,
    QuestionNumber, QuestionSet, SurveyDesign, Tally, UtilityReport,
};
use maxdiff_design::DesignEngine;
use maxdiff_estimation::EstimationEngine;
use maxdiff_ledger::{export_rows, ResponseLedger};

/// One running survey: catalog, frozen design, and mutable ledger.
///
/// The catalog and question sets are fixed at creation for a given
/// (labels, config) and never mutated afterward; only responses change.
#[derive(Debug)]
pub struct Survey {
    survey_id: Uuid,
    created_at: DateTime<Utc>,
    name: String,
    question_text: String,
    low_label: String,
    high_label: String,
    catalog: ItemCatalog,
    config: DesignConfig,
    design: SurveyDesign,
    ledger: ResponseLedger,
}

impl Survey {
    pub(crate) fn create(
        catalog: ItemCatalog,
        config: DesignConfig,
        name: String,
        question_text: String,
        low_label: String,
        high_label: String,
    ) -> MaxDiffResult<Self> {
        let design = DesignEngine::new(config).generate_all(&catalog)?;
        let ledger = ResponseLedger::initialize(&design);
        let survey_id = Uuid::new_v4();

        info!(
            %survey_id,
            items = catalog.len(),
            participants = config.participants,
            "created survey"
        );
        Ok(Self {
            survey_id,
            created_at: Utc::now(),
            name,
            question_text,
            low_label,
            high_label,
            catalog,
            config,
            design,
            ledger,
        })
    }

    // ── Metadata ─────────────────────────────────────────────────────────

    pub fn survey_id(&self) -> Uuid {
        self.survey_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn low_label(&self) -> &str {
        &self.low_label
    }

    pub fn high_label(&self) -> &str {
        &self.high_label
    }

    // ── Structure ────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    pub fn design(&self) -> &SurveyDesign {
        &self.design
    }

    pub fn ledger(&self) -> &ResponseLedger {
        &self.ledger
    }

    /// The set shown to one participant in one question.
    pub fn question_set(
        &self,
        participant_id: ParticipantId,
        question_number: QuestionNumber,
    ) -> Option<&QuestionSet> {
        self.design
            .get(&participant_id)?
            .get((question_number as usize).checked_sub(1)?)
    }

    // ── Response capture ─────────────────────────────────────────────────

    pub fn record_response(
        &mut self,
        participant_id: ParticipantId,
        question_number: QuestionNumber,
        lowest: ItemId,
        highest: ItemId,
    ) -> MaxDiffResult<()> {
        self.ledger
            .record_response(participant_id, question_number, lowest, highest)
    }

    pub fn generate_random_responses(&mut self, overwrite: bool) {
        self.ledger.generate_random_responses(overwrite);
    }

    pub fn clear_responses(&mut self) {
        self.ledger.clear_all();
    }

    pub fn completion_count(&self, participant_id: ParticipantId) -> MaxDiffResult<u32> {
        self.ledger.completion_count(participant_id)
    }

    pub fn is_complete(&self) -> bool {
        self.ledger.is_complete()
    }

    // ── Analysis ─────────────────────────────────────────────────────────

    pub fn tally(&self) -> Tally {
        self.ledger.tally(&self.catalog)
    }

    /// Flat export rows, the shape storage layers must preserve.
    pub fn export_rows(&self) -> Vec<Value> {
        export_rows(&self.ledger)
    }

    /// Run the given estimator over the current responses. The ledger is
    /// left unchanged whether or not the fit succeeds.
    pub fn estimate_utilities(
        &self,
        estimator: Box<dyn IUtilityEstimator>,
    ) -> MaxDiffResult<UtilityReport> {
        EstimationEngine::new(estimator).estimate(&self.ledger, &self.catalog)
    }
}

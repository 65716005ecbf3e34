use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info};

use maxdiff_core::{
    DesignConfig, ItemCatalog, MaxDiffResult, ParticipantId, QuestionSet, SurveyDesign,
};

use crate::{repair, rounds, stream};

/// The balanced question-set generator.
///
/// `generate_for_participant` is a pure function of (catalog, config,
/// participant id); `generate_all` fans out over participants with rayon —
/// streams are independent, so results merge only after every participant
/// completes.
#[derive(Debug, Clone)]
pub struct DesignEngine {
    config: DesignConfig,
}

impl DesignEngine {
    pub fn new(config: DesignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Generate the `Q` question sets for one participant.
    pub fn generate_for_participant(
        &self,
        catalog: &ItemCatalog,
        participant_id: ParticipantId,
    ) -> MaxDiffResult<Vec<QuestionSet>> {
        self.config.validate(catalog.len())?;

        let mut rng = stream::participant_stream(self.config.seed, participant_id);
        let (mut sets, mut counts) = rounds::generate_rounds(catalog.len(), &self.config, &mut rng);
        repair::ensure_every_item_appears(&mut sets, &mut counts, &mut rng);
        let injections = repair::cover_missing_pairs(&mut sets, catalog.len(), &mut rng);

        debug!(
            participant_id,
            injections, "generated participant question sets"
        );
        Ok(sets)
    }

    /// Generate every participant's question sets.
    pub fn generate_all(&self, catalog: &ItemCatalog) -> MaxDiffResult<SurveyDesign> {
        self.config.validate(catalog.len())?;

        let design: SurveyDesign = (1..=self.config.participants)
            .into_par_iter()
            .map(|participant_id| {
                self.generate_for_participant(catalog, participant_id)
                    .map(|sets| (participant_id, sets))
            })
            .collect::<MaxDiffResult<BTreeMap<ParticipantId, Vec<QuestionSet>>>>()?;

        info!(
            participants = self.config.participants,
            questions = self.config.questions_per_participant,
            items = catalog.len(),
            "generated full survey design"
        );
        Ok(design)
    }
}

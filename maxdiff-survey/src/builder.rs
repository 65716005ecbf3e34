use maxdiff_core::{DesignConfig, ItemCatalog, MaxDiffResult};

use crate::Survey;

/// Default prompt shown for every question.
pub const DEFAULT_QUESTION_TEXT: &str = "Which of these are most and least important for you?";
/// Default label for the least-preferred choice.
pub const DEFAULT_LOW_LABEL: &str = "Least important";
/// Default label for the most-preferred choice.
pub const DEFAULT_HIGH_LABEL: &str = "Most important";

/// Builder for a [`Survey`]: item labels plus design parameters and
/// display metadata.
#[derive(Debug, Clone)]
pub struct SurveyBuilder {
    labels: Vec<String>,
    config: DesignConfig,
    name: String,
    question_text: String,
    low_label: String,
    high_label: String,
}

impl SurveyBuilder {
    /// Start from ordered item labels. Count bounds (e.g. 6–30 items) are
    /// the caller's policy; the core only rejects an empty catalog.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            config: DesignConfig::default(),
            name: String::new(),
            question_text: DEFAULT_QUESTION_TEXT.to_string(),
            low_label: DEFAULT_LOW_LABEL.to_string(),
            high_label: DEFAULT_HIGH_LABEL.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn question_text(mut self, text: impl Into<String>) -> Self {
        self.question_text = text.into();
        self
    }

    pub fn response_labels(
        mut self,
        low: impl Into<String>,
        high: impl Into<String>,
    ) -> Self {
        self.low_label = low.into();
        self.high_label = high.into();
        self
    }

    pub fn design(mut self, config: DesignConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate, generate every participant's question sets, and initialize
    /// the empty ledger. Fails with `ConfigurationError` on invalid
    /// parameters; nothing is generated in that case.
    pub fn build(self) -> MaxDiffResult<Survey> {
        let catalog = ItemCatalog::from_labels(self.labels);
        Survey::create(
            catalog,
            self.config,
            self.name,
            self.question_text,
            self.low_label,
            self.high_label,
        )
    }
}

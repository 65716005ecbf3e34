/// Invalid design parameters, rejected before any generation happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("item catalog is empty")]
    EmptyCatalog,

    #[error("set size must be at least 2, got {items_per_set}")]
    SetSizeTooSmall { items_per_set: u32 },

    #[error("set size {items_per_set} exceeds catalog size {n_items}")]
    SetSizeExceedsCatalog { items_per_set: u32, n_items: u32 },

    #[error("questions per participant must be at least 1")]
    NoQuestions,

    #[error("participant count must be at least 1")]
    NoParticipants,
}

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigurationError;

/// Design parameters for one survey: how many items per question set, how
/// many questions each participant answers, how many participants, and the
/// master seed all per-participant streams derive from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Items shown per question (`k`).
    pub items_per_set: u32,
    /// Questions per participant (`Q`).
    pub questions_per_participant: u32,
    /// Number of participants (`P`).
    pub participants: u32,
    /// Master seed. Identical (catalog, config) always reproduces the
    /// same design.
    pub seed: u64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            items_per_set: constants::DEFAULT_ITEMS_PER_SET,
            questions_per_participant: constants::DEFAULT_QUESTIONS_PER_PARTICIPANT,
            participants: constants::DEFAULT_PARTICIPANTS,
            seed: constants::DEFAULT_SEED,
        }
    }
}

impl DesignConfig {
    /// Validate against a catalog of `n_items` items.
    ///
    /// Fatal at generation time; never retried. Recommended ranges
    /// (set size 3–6, catalog 6–30) are caller policy and not checked here.
    pub fn validate(&self, n_items: u32) -> Result<(), ConfigurationError> {
        if n_items == 0 {
            return Err(ConfigurationError::EmptyCatalog);
        }
        if self.items_per_set < constants::MIN_ITEMS_PER_SET {
            return Err(ConfigurationError::SetSizeTooSmall {
                items_per_set: self.items_per_set,
            });
        }
        if self.items_per_set > n_items {
            return Err(ConfigurationError::SetSizeExceedsCatalog {
                items_per_set: self.items_per_set,
                n_items,
            });
        }
        if self.questions_per_participant < 1 {
            return Err(ConfigurationError::NoQuestions);
        }
        if self.participants < 1 {
            return Err(ConfigurationError::NoParticipants);
        }
        Ok(())
    }

    /// Target appearance count per item: `floor(Q·k / N)`.
    /// Computed in u64 so large `Q·k` products cannot overflow.
    pub fn target_appearances(&self, n_items: u32) -> u32 {
        (u64::from(self.questions_per_participant) * u64::from(self.items_per_set)
            / u64::from(n_items)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_for_recommended_catalog() {
        let config = DesignConfig::default();
        assert!(config.validate(11).is_ok());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let config = DesignConfig {
            items_per_set: 1,
            ..DesignConfig::default()
        };
        assert!(matches!(
            config.validate(10),
            Err(ConfigurationError::SetSizeTooSmall { .. })
        ));

        let config = DesignConfig {
            items_per_set: 7,
            ..DesignConfig::default()
        };
        assert!(matches!(
            config.validate(6),
            Err(ConfigurationError::SetSizeExceedsCatalog { .. })
        ));

        let config = DesignConfig {
            questions_per_participant: 0,
            ..DesignConfig::default()
        };
        assert!(matches!(
            config.validate(10),
            Err(ConfigurationError::NoQuestions)
        ));

        let config = DesignConfig {
            participants: 0,
            ..DesignConfig::default()
        };
        assert!(matches!(
            config.validate(10),
            Err(ConfigurationError::NoParticipants)
        ));
    }

    #[test]
    fn target_appearances_floors() {
        let config = DesignConfig {
            items_per_set: 3,
            questions_per_participant: 6,
            ..DesignConfig::default()
        };
        // 6·3 / 6 = 3 exactly; 6·3 / 7 floors to 2.
        assert_eq!(config.target_appearances(6), 3);
        assert_eq!(config.target_appearances(7), 2);
    }

    #[test]
    fn target_appearances_survives_large_products() {
        let config = DesignConfig {
            items_per_set: 5_000,
            questions_per_participant: 1_000_000,
            ..DesignConfig::default()
        };
        // 5·10⁹ exceeds u32; the quotient still fits.
        assert_eq!(config.target_appearances(2_500), 2_000_000);
    }

    #[test]
    fn partial_json_fills_remaining_fields_from_defaults() {
        let config: DesignConfig =
            serde_json::from_str(r#"{"items_per_set": 5, "seed": 99}"#).unwrap();
        assert_eq!(config.items_per_set, 5);
        assert_eq!(config.seed, 99);
        assert_eq!(
            config.questions_per_participant,
            constants::DEFAULT_QUESTIONS_PER_PARTICIPANT
        );
        assert_eq!(config.participants, constants::DEFAULT_PARTICIPANTS);

        let round_trip: DesignConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }
}

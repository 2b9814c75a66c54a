//! Battle configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Battle rules configuration.
///
/// Every field has a default, so a config file only needs to list overrides.
///
/// ```
/// use mage_battle::core::BattleConfig;
///
/// let config = BattleConfig::from_json_str(r#"{ "spell_limit": 2 }"#).unwrap();
/// assert_eq!(config.spell_limit, 2);
/// assert_eq!(config.stat_limit, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Largest absolute stat modifier stage (default: 6).
    /// Also scales the speed differential in evasion checks.
    pub modifier_minmax: i32,

    /// Maximum number of spells a mage may know (default: 4).
    /// Extra spells are dropped from the end of the list.
    pub spell_limit: usize,

    /// Budget for health + attack + defense + speed (default: 100).
    /// Mages over budget are scaled down proportionally.
    pub stat_limit: i32,

    /// Element used when a mage names an unknown element (default: "Ice").
    pub default_element: String,

    /// Seed for the session RNG (default: 42).
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            modifier_minmax: 6,
            spell_limit: 4,
            stat_limit: 100,
            default_element: "Ice".to_string(),
            seed: 42,
        }
    }
}

impl BattleConfig {
    /// Parse a JSON config, keeping defaults for missing keys.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the spell limit.
    #[must_use]
    pub fn with_spell_limit(mut self, limit: usize) -> Self {
        self.spell_limit = limit;
        self
    }

    /// Set the stat budget.
    #[must_use]
    pub fn with_stat_limit(mut self, limit: i32) -> Self {
        self.stat_limit = limit;
        self
    }

    /// Set the fallback element.
    #[must_use]
    pub fn with_default_element(mut self, element: impl Into<String>) -> Self {
        self.default_element = element.into();
        self
    }
}

//! Move results handed back to the driver.

use serde::{Deserialize, Serialize};

use crate::core::CombatantId;
use crate::effects::EffectSummary;
use crate::error::CastFailure;
use crate::spells::SpellCast;

/// Outcome of one move attempt.
///
/// Successful moves carry the spell name and the per-effect summaries;
/// failed moves carry a reason and, when one was chosen, the spell name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub success: bool,
    pub caster: CombatantId,
    pub caster_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<CastFailure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell: Option<String>,
    #[serde(default)]
    pub result: Vec<EffectSummary>,
}

impl MoveResult {
    /// A move that failed before or while casting.
    pub fn failure(caster: CombatantId, caster_name: impl Into<String>, reason: CastFailure) -> Self {
        Self {
            success: false,
            caster,
            caster_name: caster_name.into(),
            reason: Some(reason),
            spell: None,
            result: Vec::new(),
        }
    }

    /// A completed cast.
    pub fn cast(caster_name: impl Into<String>, cast: SpellCast) -> Self {
        Self {
            success: true,
            caster: cast.caster,
            caster_name: caster_name.into(),
            reason: None,
            spell: Some(cast.spell),
            result: cast.result,
        }
    }

    /// Attach the spell that was attempted.
    #[must_use]
    pub fn with_spell(mut self, spell: impl Into<String>) -> Self {
        self.spell = Some(spell.into());
        self
    }

    /// Total damage sustained by all targets.
    #[must_use]
    pub fn total_sustained(&self) -> i32 {
        self.result.iter().map(EffectSummary::sustained).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_serializes_reason_string() {
        let result = MoveResult::failure(CombatantId::new(2), "Ember", CastFailure::UnknownSpell)
            .with_spell("Blizzard");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["reason"], "unknown spell");
        assert_eq!(json["spell"], "Blizzard");
        assert_eq!(json["result"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_cast_result() {
        let cast = SpellCast {
            caster: CombatantId::new(1),
            spell: "Gust".to_string(),
            result: Vec::new(),
        };
        let result = MoveResult::cast("Zephyr", cast);

        assert!(result.success);
        assert_eq!(result.reason, None);
        assert_eq!(result.spell.as_deref(), Some("Gust"));
        assert_eq!(result.total_sustained(), 0);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("reason").is_none());
    }
}

//! Structured outcomes of applied effects.
//!
//! Summaries are the only channel from the engine to presentation layers.
//! They serialize with a `type` tag: `attack`, `rebound`, `leech`,
//! `stat_boost`, `stat_reduce` or `healing`.

use serde::{Deserialize, Serialize};

use crate::core::{CombatantId, Stat};

/// Outcome of an attack-family effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackSummary {
    pub target: CombatantId,
    pub target_name: String,
    /// The effect's element is strong against the target's element.
    pub super_effective: bool,
    /// The effect's element is weak against the target's element.
    pub not_very_effective: bool,
    pub evades: bool,
    /// Absent when the target evaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    /// Computed damage. Absent when the target evaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<i32>,
    /// Damage actually taken by the target.
    pub sustained: i32,
    /// Self-damage dealt to the caster by a rebound attack that hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebound: Option<i32>,
    /// Health drained to the caster by a leech attack that dealt damage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leech: Option<i32>,
}

impl AttackSummary {
    pub(crate) fn new(
        target: CombatantId,
        target_name: impl Into<String>,
        super_effective: bool,
        not_very_effective: bool,
    ) -> Self {
        Self {
            target,
            target_name: target_name.into(),
            super_effective,
            not_very_effective,
            evades: false,
            critical: None,
            effect: None,
            sustained: 0,
            rebound: None,
            leech: None,
        }
    }
}

/// Outcome of a stat boost or reduction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSummary {
    pub target: CombatantId,
    pub target_name: String,
    pub stat: Stat,
    /// Stages requested.
    pub power: i32,
    /// Stages applied, `0` at the cap, `-1` if the target had fainted.
    pub effect: i32,
}

/// Outcome of a heal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealingSummary {
    pub target: CombatantId,
    pub target_name: String,
    /// Health requested.
    pub effect: i32,
    /// Health actually restored.
    pub restored: i32,
}

/// Result of applying one effect to one target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectSummary {
    Attack(AttackSummary),
    Rebound(AttackSummary),
    Leech(AttackSummary),
    StatBoost(StatSummary),
    StatReduce(StatSummary),
    Healing(HealingSummary),
}

impl EffectSummary {
    /// Serialized `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Attack(_) => "attack",
            Self::Rebound(_) => "rebound",
            Self::Leech(_) => "leech",
            Self::StatBoost(_) => "stat_boost",
            Self::StatReduce(_) => "stat_reduce",
            Self::Healing(_) => "healing",
        }
    }

    /// Combatant the effect was applied to.
    #[must_use]
    pub fn target(&self) -> CombatantId {
        match self {
            Self::Attack(s) | Self::Rebound(s) | Self::Leech(s) => s.target,
            Self::StatBoost(s) | Self::StatReduce(s) => s.target,
            Self::Healing(s) => s.target,
        }
    }

    /// Attack details, for any attack-family summary.
    #[must_use]
    pub fn as_attack(&self) -> Option<&AttackSummary> {
        match self {
            Self::Attack(s) | Self::Rebound(s) | Self::Leech(s) => Some(s),
            _ => None,
        }
    }

    /// Damage the target sustained. Zero for non-attack effects.
    #[must_use]
    pub fn sustained(&self) -> i32 {
        self.as_attack().map_or(0, |s| s.sustained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_summary_serializes_with_tag() {
        let mut summary = AttackSummary::new(CombatantId::new(1), "Pyro", true, false);
        summary.critical = Some(false);
        summary.effect = Some(28);
        summary.sustained = 28;

        let json = serde_json::to_value(EffectSummary::Attack(summary)).unwrap();
        assert_eq!(json["type"], "attack");
        assert_eq!(json["super_effective"], true);
        assert_eq!(json["sustained"], 28);
        assert!(json.get("rebound").is_none());
        assert!(json.get("leech").is_none());
    }

    #[test]
    fn test_evaded_summary_omits_critical() {
        let mut summary = AttackSummary::new(CombatantId::new(0), "Tide", false, false);
        summary.evades = true;

        let json = serde_json::to_value(EffectSummary::Leech(summary)).unwrap();
        assert_eq!(json["type"], "leech");
        assert_eq!(json["evades"], true);
        assert!(json.get("critical").is_none());
        assert!(json.get("effect").is_none());
    }

    #[test]
    fn test_accessors() {
        let heal = EffectSummary::Healing(HealingSummary {
            target: CombatantId::new(2),
            target_name: "Moss".to_string(),
            effect: 10,
            restored: 4,
        });
        assert_eq!(heal.kind(), "healing");
        assert_eq!(heal.target(), CombatantId::new(2));
        assert_eq!(heal.sustained(), 0);
        assert!(heal.as_attack().is_none());

        let stat = EffectSummary::StatReduce(StatSummary {
            target: CombatantId::new(1),
            target_name: "Pyro".to_string(),
            stat: Stat::Defense,
            power: 2,
            effect: 2,
        });
        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(json["type"], "stat_reduce");
        assert_eq!(json["stat"], "defense");
    }
}

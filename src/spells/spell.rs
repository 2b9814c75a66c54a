//! Spells: named, ordered bundles of effects.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CombatantId, RandomSource};
use crate::effects::{Effect, EffectResolver, EffectSummary};
use crate::elements::Element;
use crate::error::ResolveError;
use crate::mage::{MageManager, Roster};

/// How a spell spreads its effects over targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastKind {
    /// Every effect hits one target. A team target yields one random member.
    Single,
    /// Every effect hits every target, targets outer and effects inner.
    Group,
}

impl CastKind {
    /// `type` tag used in content files.
    #[must_use]
    pub fn content_tag(self) -> &'static str {
        match self {
            CastKind::Single => "single",
            CastKind::Group => "group",
        }
    }

    /// Parse a content-file `type` tag.
    #[must_use]
    pub fn from_content_tag(tag: &str) -> Option<Self> {
        match tag {
            "single" => Some(CastKind::Single),
            "group" => Some(CastKind::Group),
            _ => None,
        }
    }
}

/// Resolved target of a cast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CastTarget {
    /// One combatant.
    Unit(CombatantId),
    /// A whole team, in roster order.
    Team(Vec<CombatantId>),
}

/// Aggregate outcome of one cast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    pub caster: CombatantId,
    pub spell: String,
    /// Per-effect summaries in application order.
    pub result: Vec<EffectSummary>,
}

/// A castable spell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spell {
    pub name: String,
    /// Element checked for cast compatibility.
    pub element: Arc<Element>,
    pub kind: CastKind,
    /// Effects in execution order.
    pub effects: Vec<Effect>,
}

impl Spell {
    /// Create a spell.
    pub fn new(
        name: impl Into<String>,
        element: Arc<Element>,
        kind: CastKind,
        effects: impl IntoIterator<Item = Effect>,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            kind,
            effects: effects.into_iter().collect(),
        }
    }

    /// Whether `caster`'s element allows casting this spell.
    #[must_use]
    pub fn is_castable_by(&self, caster: &MageManager) -> bool {
        self.element.is_compatible_with(caster.element())
    }

    /// Apply every effect to the target(s) and collect the summaries.
    ///
    /// Does not check castability. A single-target spell aimed at an empty
    /// team fails with [`ResolveError::NoTargets`]; a group spell aimed at an
    /// empty team succeeds with no summaries.
    pub fn cast(
        &self,
        roster: &mut Roster,
        caster: CombatantId,
        target: &CastTarget,
        rng: &mut dyn RandomSource,
    ) -> Result<SpellCast, ResolveError> {
        let targets: Vec<CombatantId> = match (self.kind, target) {
            (_, CastTarget::Unit(id)) => vec![*id],
            (CastKind::Single, CastTarget::Team(team)) => {
                if team.is_empty() {
                    return Err(ResolveError::NoTargets);
                }
                vec![team[rng.pick_index(team.len())]]
            }
            (CastKind::Group, CastTarget::Team(team)) => team.clone(),
        };

        let mut result = Vec::with_capacity(targets.len() * self.effects.len());
        for &target_id in &targets {
            for effect in &self.effects {
                result.push(EffectResolver::apply(effect, roster, caster, target_id, rng)?);
            }
        }
        debug!(spell = %self.name, targets = targets.len(), summaries = result.len(), "cast resolved");

        Ok(SpellCast {
            caster,
            spell: self.name.clone(),
            result,
        })
    }
}

//! Spell commands.

use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{CombatantId, RandomSource};
use crate::error::CastFailure;
use crate::mage::Roster;
use crate::spells::{CastTarget, Spell};

use super::result::MoveResult;

/// Mutable battle state a command runs against.
pub struct CastContext<'a> {
    pub roster: &'a mut Roster,
    pub rng: &'a mut dyn RandomSource,
}

/// A fully resolved action, ready to run.
pub trait SpellCommand {
    /// Mage performing the command.
    fn caster(&self) -> CombatantId;

    /// Spell the command casts.
    fn spell_name(&self) -> &str;

    /// Run the command. Failures come back as a failed [`MoveResult`].
    fn execute(&self, ctx: &mut CastContext<'_>) -> MoveResult;
}

/// Cast a spell at an already resolved target.
///
/// Checks castability, then runs the spell.
#[derive(Clone, Debug)]
pub struct CastSpell {
    spell: Arc<Spell>,
    caster: CombatantId,
    target: CastTarget,
}

impl CastSpell {
    pub fn new(spell: Arc<Spell>, caster: CombatantId, target: CastTarget) -> Self {
        Self {
            spell,
            caster,
            target,
        }
    }

    #[must_use]
    pub fn target(&self) -> &CastTarget {
        &self.target
    }
}

impl SpellCommand for CastSpell {
    fn caster(&self) -> CombatantId {
        self.caster
    }

    fn spell_name(&self) -> &str {
        &self.spell.name
    }

    fn execute(&self, ctx: &mut CastContext<'_>) -> MoveResult {
        let Some(mage) = ctx.roster.get(self.caster) else {
            warn!(caster = %self.caster, "caster is not part of this battle");
            return MoveResult::failure(self.caster, String::new(), CastFailure::DoesNothing)
                .with_spell(&self.spell.name);
        };
        let caster_name = mage.name().to_string();

        if !self.spell.is_castable_by(mage) {
            info!(caster = %caster_name, spell = %self.spell.name, "can't cast");
            return MoveResult::failure(self.caster, caster_name, CastFailure::CannotCast)
                .with_spell(&self.spell.name);
        }

        info!(caster = %caster_name, spell = %self.spell.name, "casts");
        match self.spell.cast(ctx.roster, self.caster, &self.target, ctx.rng) {
            Ok(cast) => MoveResult::cast(caster_name, cast),
            Err(error) => {
                warn!(caster = %caster_name, spell = %self.spell.name, %error, "spell does nothing");
                MoveResult::failure(self.caster, caster_name, CastFailure::DoesNothing)
                    .with_spell(&self.spell.name)
            }
        }
    }
}

//! Battle sessions: the entry point drivers call each turn.

use std::sync::Arc;

use tracing::{info, warn};

use crate::content::ContentLibrary;
use crate::core::{BattleConfig, BattleRng, CombatantId, RandomSource};
use crate::error::{CastFailure, ContentError};
use crate::mage::{MageDefinition, MageManager, Roster};
use crate::spells::CastTarget;

use super::command::{CastContext, CastSpell};
use super::decision::{DecisionSource, TargetSelector};
use super::invoker::{CastRecord, Magic};
use super::result::MoveResult;

/// One battle: shared content, the combatants and the battle RNG.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
///
/// use mage_battle::content::ContentLibrary;
/// use mage_battle::core::BattleConfig;
/// use mage_battle::mage::{MageDefinition, MageView};
/// use mage_battle::magic::{BattleSession, Decision, TargetSelector};
/// use mage_battle::DecisionError;
///
/// let json = r#"{
///     "elements": [{ "name": "Ice" }, { "name": "Fire", "strong": ["Ice"] }],
///     "spells": [{
///         "name": "Cinder",
///         "element": "Fire",
///         "type": "single",
///         "effects": [{ "type": "attack", "power": 40 }]
///     }]
/// }"#;
/// let (library, _) = ContentLibrary::from_json_str(json).unwrap();
///
/// let mut session = BattleSession::new(Arc::new(library), BattleConfig::default().with_seed(7));
/// let pyro = session
///     .add_mage(&MageDefinition::new("Pyro", "Fire").with_stats(30, 20, 20, 20).with_spells(["Cinder"]))
///     .unwrap();
/// let frost = session
///     .add_mage(&MageDefinition::new("Frost", "Ice").with_stats(30, 20, 20, 20))
///     .unwrap();
///
/// let mut ai = |_: &[MageView], enemies: &[MageView]| -> Result<Decision, DecisionError> {
///     Ok(Decision::new("Cinder", TargetSelector::Unit(enemies[0].id)))
/// };
/// let result = session.make_move(pyro, &[pyro], &[frost], &mut ai);
/// assert!(result.success);
/// assert_eq!(result.spell.as_deref(), Some("Cinder"));
/// ```
#[derive(Debug)]
pub struct BattleSession<R: RandomSource = BattleRng> {
    library: Arc<ContentLibrary>,
    config: BattleConfig,
    roster: Roster,
    rng: R,
    magic: Magic,
}

impl BattleSession<BattleRng> {
    /// Create a session with an RNG seeded from `config.seed`.
    pub fn new(library: Arc<ContentLibrary>, config: BattleConfig) -> Self {
        let rng = BattleRng::new(config.seed);
        Self::with_rng(library, config, rng)
    }
}

impl<R: RandomSource> BattleSession<R> {
    /// Create a session with a caller-supplied random source.
    pub fn with_rng(library: Arc<ContentLibrary>, config: BattleConfig, rng: R) -> Self {
        Self {
            library,
            config,
            roster: Roster::new(),
            rng,
            magic: Magic::new(),
        }
    }

    /// Build a combatant from its definition and add it to the battle.
    pub fn add_mage(&mut self, definition: &MageDefinition) -> Result<CombatantId, ContentError> {
        let mage = MageManager::new(definition, self.library.elements(), &self.config)?;
        let id = self.roster.add(mage);
        info!(mage = %definition.name, %id, "joined the battle");
        Ok(id)
    }

    #[must_use]
    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get a combatant by id.
    #[must_use]
    pub fn mage(&self, id: CombatantId) -> Option<&MageManager> {
        self.roster.get(id)
    }

    /// Get a mutable combatant by id, for scripted setups.
    pub fn mage_mut(&mut self, id: CombatantId) -> Option<&mut MageManager> {
        self.roster.get_mut(id)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Every executed cast, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CastRecord] {
        self.magic.history()
    }

    /// Whether any member of `team` can still act.
    #[must_use]
    pub fn is_team_conscious(&self, team: &[CombatantId]) -> bool {
        self.roster.any_conscious(team)
    }

    /// Ask `decider` for a move and carry it out.
    ///
    /// Never panics and never returns an error: every problem becomes a
    /// failed [`MoveResult`] with its reason. Checks run in this order:
    /// caster conscious, decision obtained, spell exists, caster knows the
    /// spell, target valid, spell castable.
    pub fn make_move(
        &mut self,
        caster: CombatantId,
        allies: &[CombatantId],
        enemies: &[CombatantId],
        decider: &mut dyn DecisionSource,
    ) -> MoveResult {
        let Some(mage) = self.roster.get(caster) else {
            warn!(%caster, "caster is not part of this battle");
            return MoveResult::failure(caster, String::new(), CastFailure::DoesNothing);
        };
        let caster_name = mage.name().to_string();

        if !mage.is_conscious() {
            info!(caster = %caster_name, "has fainted and cannot move");
            return MoveResult::failure(caster, caster_name, CastFailure::Fainted);
        }

        let ally_views = self.roster.views(allies);
        let enemy_views = self.roster.views(enemies);
        let decision = match decider.decide(&ally_views, &enemy_views) {
            Ok(decision) => decision,
            Err(error) => {
                warn!(caster = %caster_name, %error, "no usable decision");
                return MoveResult::failure(caster, caster_name, CastFailure::DoesNothing);
            }
        };

        let Some(spell) = self.library.spell(&decision.spell) else {
            return MoveResult::failure(caster, caster_name, CastFailure::BadSpell)
                .with_spell(decision.spell);
        };
        if !mage.knows_spell(&spell.name) {
            info!(caster = %caster_name, spell = %spell.name, "does not know the spell");
            return MoveResult::failure(caster, caster_name, CastFailure::UnknownSpell)
                .with_spell(decision.spell);
        }

        let target = match decision.target {
            TargetSelector::Caster => CastTarget::Unit(caster),
            TargetSelector::AllAllies => CastTarget::Team(self.live_members(allies)),
            TargetSelector::AllEnemies => CastTarget::Team(self.live_members(enemies)),
            TargetSelector::Unit(id)
                if (id == caster || allies.contains(&id) || enemies.contains(&id))
                    && self.roster.contains(id) =>
            {
                CastTarget::Unit(id)
            }
            TargetSelector::Unit(id) => {
                warn!(caster = %caster_name, target = %id, "invalid target");
                return MoveResult::failure(caster, caster_name, CastFailure::InvalidTarget)
                    .with_spell(decision.spell);
            }
        };

        let command = CastSpell::new(spell, caster, target);
        let mut ctx = CastContext {
            roster: &mut self.roster,
            rng: &mut self.rng,
        };
        self.magic.execute(&command, &mut ctx)
    }

    /// Cast a spell by name at an explicit target.
    ///
    /// Skips the decision and spell-knowledge checks; castability is still
    /// enforced. Unknown spells fail with reason "bad spell".
    pub fn cast_spell(&mut self, spell: &str, caster: CombatantId, target: CastTarget) -> MoveResult {
        let Some(found) = self.library.spell(spell) else {
            let caster_name = self.roster.get(caster).map(|m| m.name().to_string()).unwrap_or_default();
            return MoveResult::failure(caster, caster_name, CastFailure::BadSpell).with_spell(spell);
        };

        let command = CastSpell::new(found, caster, target);
        let mut ctx = CastContext {
            roster: &mut self.roster,
            rng: &mut self.rng,
        };
        self.magic.execute(&command, &mut ctx)
    }

    /// Members of `team` that exist in the roster, in order.
    fn live_members(&self, team: &[CombatantId]) -> Vec<CombatantId> {
        team.iter().copied().filter(|&id| self.roster.contains(id)).collect()
    }
}

//! Effect resolution: applying effects to combatants in a roster.
//!
//! The resolver works on combatant ids rather than references so that a
//! caster may target itself. Every read of caster and target state happens
//! before the first write.

use tracing::{debug, info};

use crate::core::{CombatantId, RandomSource, Stat};
use crate::error::ResolveError;
use crate::mage::{MageManager, Roster};

use super::effect::{AttackEffect, Effect};
use super::summary::{AttackSummary, EffectSummary, HealingSummary, StatSummary};

fn mage(roster: &Roster, id: CombatantId) -> Result<&MageManager, ResolveError> {
    roster.get(id).ok_or(ResolveError::UnknownCombatant(id))
}

fn mage_mut(roster: &mut Roster, id: CombatantId) -> Result<&mut MageManager, ResolveError> {
    roster.get_mut(id).ok_or(ResolveError::UnknownCombatant(id))
}

/// Applies effects to combatants.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `effect` from `caster` to `target`.
    ///
    /// Consumes one evasion roll for attacks, followed by one critical roll
    /// when the attack lands. Stat and healing effects consume nothing.
    pub fn apply(
        effect: &Effect,
        roster: &mut Roster,
        caster: CombatantId,
        target: CombatantId,
        rng: &mut dyn RandomSource,
    ) -> Result<EffectSummary, ResolveError> {
        mage(roster, caster)?;

        match effect {
            Effect::Attack(attack) => {
                Self::strike(attack, roster, caster, target, rng).map(EffectSummary::Attack)
            }

            Effect::ReboundAttack(rebound_attack) => {
                let mut summary = Self::strike(&rebound_attack.attack, roster, caster, target, rng)?;
                if !summary.evades {
                    let rebound = if summary.sustained > 0 {
                        let caster_ref = mage(roster, caster)?;
                        let self_damage =
                            rebound_attack.attack.compute_damage(caster_ref, caster_ref, false);
                        percent_of(self_damage, rebound_attack.rebound).max(1)
                    } else {
                        0
                    };
                    let caster_mut = mage_mut(roster, caster)?;
                    info!(caster = %caster_mut.name(), rebound, "hit by the rebound");
                    caster_mut.take_damage(rebound);
                    summary.rebound = Some(rebound);
                }
                Ok(EffectSummary::Rebound(summary))
            }

            Effect::LeechAttack(leech_attack) => {
                let mut summary = Self::strike(&leech_attack.attack, roster, caster, target, rng)?;
                if summary.sustained > 0 {
                    let leeched = percent_of(summary.sustained, leech_attack.leech).max(1);
                    let caster_mut = mage_mut(roster, caster)?;
                    info!(
                        caster = %caster_mut.name(),
                        target = %summary.target_name,
                        leeched,
                        "absorbs energy"
                    );
                    caster_mut.restore_health(leeched);
                    summary.leech = Some(leeched);
                }
                Ok(EffectSummary::Leech(summary))
            }

            Effect::BoostStat(boost) => {
                let (target_name, applied) = Self::change_stat(roster, target, boost.stat, |m| {
                    m.boost_stat(boost.stat, boost.power)
                })?;
                Ok(EffectSummary::StatBoost(StatSummary {
                    target,
                    target_name,
                    stat: boost.stat,
                    power: boost.power,
                    effect: applied,
                }))
            }

            Effect::ReduceStat(reduce) => {
                let (target_name, applied) = Self::change_stat(roster, target, reduce.stat, |m| {
                    m.reduce_stat(reduce.stat, reduce.power)
                })?;
                Ok(EffectSummary::StatReduce(StatSummary {
                    target,
                    target_name,
                    stat: reduce.stat,
                    power: reduce.power,
                    effect: applied,
                }))
            }

            Effect::Heal(heal) => {
                let target_mut = mage_mut(roster, target)?;
                let restored = target_mut.restore_health(heal.power);
                Ok(EffectSummary::Healing(HealingSummary {
                    target,
                    target_name: target_mut.name().to_string(),
                    effect: heal.power,
                    restored,
                }))
            }
        }
    }

    /// Hit chance in percent after the speed adjustment, capped at 100.
    ///
    /// ```
    /// use mage_battle::effects::EffectResolver;
    ///
    /// assert_eq!(EffectResolver::effective_accuracy(90, 20, 20, 6), 90.0);
    /// assert_eq!(EffectResolver::effective_accuracy(100, 10, 30, 6), 40.0);
    /// ```
    #[must_use]
    pub fn effective_accuracy(
        accuracy: i32,
        attacker_speed: i32,
        evader_speed: i32,
        modifier_minmax: i32,
    ) -> f64 {
        let diff = f64::from(attacker_speed - evader_speed)
            / f64::from((attacker_speed + evader_speed).max(1));
        // Truncates toward zero.
        let scaled = (diff * f64::from(modifier_minmax)) as i32;
        let ratio = f64::from(2.max(2 + scaled)) / f64::from(2.max(2 - scaled));
        (f64::from(accuracy) * ratio).min(100.0)
    }

    /// Roll whether `target` dodges an effect with `accuracy` cast by `caster`.
    ///
    /// Ties with the effective accuracy hit.
    pub fn target_evades(
        accuracy: i32,
        caster: &MageManager,
        target: &MageManager,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let threshold = Self::effective_accuracy(
            accuracy,
            caster.get_stat(Stat::Speed),
            target.get_stat(Stat::Speed),
            caster.modifier_minmax(),
        );
        f64::from(rng.roll_percent()) > threshold
    }

    /// Roll for a critical hit.
    pub fn is_critical_hit(critical_hit_prob: i32, rng: &mut dyn RandomSource) -> bool {
        rng.roll_percent() < critical_hit_prob
    }

    fn strike(
        attack: &AttackEffect,
        roster: &mut Roster,
        caster: CombatantId,
        target: CombatantId,
        rng: &mut dyn RandomSource,
    ) -> Result<AttackSummary, ResolveError> {
        let (mut summary, damage) = {
            let caster_ref = mage(roster, caster)?;
            let target_ref = mage(roster, target)?;

            let mut summary = AttackSummary::new(
                target,
                target_ref.name(),
                attack.element.is_strong_against(target_ref.element()),
                attack.element.is_weak_against(target_ref.element()),
            );

            if Self::target_evades(attack.accuracy, caster_ref, target_ref, rng) {
                info!(target = %target_ref.name(), "evades the attack");
                summary.evades = true;
                return Ok(summary);
            }

            let critical = Self::is_critical_hit(attack.critical_hit_prob, rng);
            let damage = attack.compute_damage(caster_ref, target_ref, critical);
            debug!(
                caster = %caster_ref.name(),
                target = %target_ref.name(),
                critical,
                super_effective = summary.super_effective,
                not_very_effective = summary.not_very_effective,
                damage,
                "attack lands"
            );

            summary.critical = Some(critical);
            summary.effect = Some(damage);
            (summary, damage)
        };

        summary.sustained = mage_mut(roster, target)?.take_damage(damage);
        Ok(summary)
    }

    fn change_stat(
        roster: &mut Roster,
        target: CombatantId,
        stat: Stat,
        change: impl FnOnce(&mut MageManager) -> i32,
    ) -> Result<(String, i32), ResolveError> {
        let target_mut = mage_mut(roster, target)?;
        let applied = change(target_mut);
        debug!(target = %target_mut.name(), %stat, applied, "stat effect resolved");
        Ok((target_mut.name().to_string(), applied))
    }
}

/// `value * percent / 100` without intermediate overflow.
fn percent_of(value: i32, percent: i32) -> i32 {
    let scaled = i64::from(value) * i64::from(percent) / 100;
    i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{BattleConfig, ScriptedRolls};
    use crate::elements::{Element, ElementRegistry};
    use crate::mage::MageDefinition;

    struct Arena {
        elements: ElementRegistry,
        roster: Roster,
        caster: CombatantId,
        target: CombatantId,
    }

    fn elements() -> ElementRegistry {
        let mut elements = ElementRegistry::new();
        elements.register("Fire", ["Ice"], ["Water"], []);
        elements.register("Ice", ["Grass"], [], []);
        elements.register("Water", ["Fire"], [], []);
        elements
    }

    fn arena(target_element: &str) -> Arena {
        let elements = elements();
        let config = BattleConfig::default();
        let mut roster = Roster::new();

        let caster_def = MageDefinition::new("Caster", "Ice").with_stats(20, 50, 10, 10);
        let target_def = MageDefinition::new("Target", target_element).with_stats(40, 10, 25, 10);
        let caster = roster.add(MageManager::new(&caster_def, &elements, &config).unwrap());
        let target = roster.add(MageManager::new(&target_def, &elements, &config).unwrap());

        Arena {
            elements,
            roster,
            caster,
            target,
        }
    }

    fn element(arena: &Arena, name: &str) -> Arc<Element> {
        arena.elements.lookup(name).unwrap()
    }

    #[test]
    fn test_compute_damage_neutral_strong_weak() {
        let neutral = arena("Ice");
        let attack = AttackEffect {
            element: element(&neutral, "Fire"),
            power: 80,
            accuracy: 100,
            critical_hit_prob: 0,
        };
        let caster = neutral.roster.get(neutral.caster).unwrap();

        let ice_target = neutral.roster.get(neutral.target).unwrap();
        assert_eq!(attack.compute_damage(caster, ice_target, false), 28);

        let water = arena("Water");
        let water_target = water.roster.get(water.target).unwrap();
        assert_eq!(attack.compute_damage(caster, water_target, false), 7);

        let plain = AttackEffect {
            element: element(&neutral, "Ice"),
            ..attack
        };
        assert_eq!(plain.compute_damage(caster, ice_target, false), 14);
        assert_eq!(plain.compute_damage(caster, ice_target, true), 28);
    }

    #[test]
    fn test_critical_ignores_defense_boost() {
        let mut arena = arena("Ice");
        arena.roster.get_mut(arena.target).unwrap().boost_stat(Stat::Defense, 6);
        let attack = AttackEffect {
            element: element(&arena, "Ice"),
            power: 80,
            accuracy: 100,
            critical_hit_prob: 0,
        };
        let caster = arena.roster.get(arena.caster).unwrap();
        let target = arena.roster.get(arena.target).unwrap();

        // Defense 100: 8000 / 100 / 25 + 2
        assert_eq!(attack.compute_damage(caster, target, false), 5);
        assert_eq!(attack.compute_damage(caster, target, true), 28);
    }

    #[test]
    fn test_effective_accuracy() {
        assert_eq!(EffectResolver::effective_accuracy(80, 10, 10, 6), 80.0);
        assert_eq!(EffectResolver::effective_accuracy(50, 30, 10, 6), 100.0);
        assert_eq!(EffectResolver::effective_accuracy(100, 10, 30, 6), 40.0);
        assert_eq!(EffectResolver::effective_accuracy(100, 0, 0, 6), 100.0);
    }

    #[test]
    fn test_attack_hits_and_reports() {
        let mut arena = arena("Ice");
        let effect = Effect::attack(element(&arena, "Fire"), 80, 100, 0);
        let mut rng = ScriptedRolls::new().with_rolls([100, 50]);

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();

        let attack = summary.as_attack().unwrap();
        assert_eq!(summary.kind(), "attack");
        assert!(!attack.evades);
        assert!(attack.super_effective);
        assert!(!attack.not_very_effective);
        assert_eq!(attack.critical, Some(false));
        assert_eq!(attack.effect, Some(28));
        assert_eq!(attack.sustained, 28);
        assert_eq!(arena.roster.get(arena.target).unwrap().cur_hp(), 12);
    }

    #[test]
    fn test_attack_evaded() {
        let mut arena = arena("Ice");
        let effect = Effect::attack(element(&arena, "Ice"), 80, 90, 0);
        let mut rng = ScriptedRolls::new().with_rolls([91]);

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();

        let attack = summary.as_attack().unwrap();
        assert!(attack.evades);
        assert_eq!(attack.critical, None);
        assert_eq!(attack.effect, None);
        assert_eq!(attack.sustained, 0);
        assert_eq!(arena.roster.get(arena.target).unwrap().cur_hp(), 40);
    }

    #[test]
    fn test_critical_roll_doubles_damage() {
        let mut arena = arena("Ice");
        let effect = Effect::attack(element(&arena, "Ice"), 80, 100, 10);
        let mut rng = ScriptedRolls::new().with_rolls([0, 9]);

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();

        let attack = summary.as_attack().unwrap();
        assert_eq!(attack.critical, Some(true));
        assert_eq!(attack.sustained, 28);
    }

    #[test]
    fn test_damage_clamped_to_remaining_health() {
        let mut arena = arena("Ice");
        arena.roster.get_mut(arena.target).unwrap().take_damage(35);
        let effect = Effect::attack(element(&arena, "Ice"), 80, 100, 0);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();

        let attack = summary.as_attack().unwrap();
        assert_eq!(attack.effect, Some(14));
        assert_eq!(attack.sustained, 5);
        assert!(!arena.roster.get(arena.target).unwrap().is_conscious());
    }

    #[test]
    fn test_rebound_damages_caster() {
        let mut arena = arena("Ice");
        let effect = Effect::rebound_attack(element(&arena, "Ice"), 80, 100, 0, 10);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();

        // Self damage: 2 * 50 * 80 / 10 / 25 + 2 = 34, 10% of that is 3.
        let attack = summary.as_attack().unwrap();
        assert_eq!(summary.kind(), "rebound");
        assert_eq!(attack.sustained, 14);
        assert_eq!(attack.rebound, Some(3));
        assert_eq!(arena.roster.get(arena.caster).unwrap().cur_hp(), 17);
    }

    #[test]
    fn test_rebound_floor_and_zero() {
        let mut arena = arena("Ice");
        let effect = Effect::rebound_attack(element(&arena, "Ice"), 80, 100, 0, 1);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        assert_eq!(summary.as_attack().unwrap().rebound, Some(1));

        arena.roster.get_mut(arena.target).unwrap().take_damage(100);
        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        let attack = summary.as_attack().unwrap();
        assert_eq!(attack.sustained, 0);
        assert_eq!(attack.rebound, Some(0));
        assert_eq!(arena.roster.get(arena.caster).unwrap().cur_hp(), 19);
    }

    #[test]
    fn test_rebound_evaded_has_no_rebound() {
        let mut arena = arena("Ice");
        let effect = Effect::rebound_attack(element(&arena, "Ice"), 80, 50, 0, 50);
        let mut rng = ScriptedRolls::new().with_rolls([75]);

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        assert!(summary.as_attack().unwrap().evades);
        assert_eq!(summary.as_attack().unwrap().rebound, None);
        assert_eq!(arena.roster.get(arena.caster).unwrap().cur_hp(), 20);
    }

    #[test]
    fn test_leech_heals_caster() {
        let mut arena = arena("Ice");
        arena.roster.get_mut(arena.caster).unwrap().take_damage(10);
        let effect = Effect::leech_attack(element(&arena, "Ice"), 80, 100, 0, 50);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();

        let attack = summary.as_attack().unwrap();
        assert_eq!(summary.kind(), "leech");
        assert_eq!(attack.sustained, 14);
        assert_eq!(attack.leech, Some(7));
        assert_eq!(arena.roster.get(arena.caster).unwrap().cur_hp(), 17);
    }

    #[test]
    fn test_leech_without_damage_reports_nothing() {
        let mut arena = arena("Ice");
        arena.roster.get_mut(arena.target).unwrap().take_damage(100);
        let effect = Effect::leech_attack(element(&arena, "Ice"), 80, 100, 0, 50);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        assert_eq!(summary.as_attack().unwrap().leech, None);
    }

    #[test]
    fn test_self_targeted_attack() {
        let mut arena = arena("Ice");
        let effect = Effect::attack(element(&arena, "Ice"), 80, 100, 0);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&effect, &mut arena.roster, arena.caster, arena.caster, &mut rng)
                .unwrap();
        assert_eq!(summary.target(), arena.caster);
        assert_eq!(summary.sustained(), 20);
        assert!(!arena.roster.get(arena.caster).unwrap().is_conscious());
    }

    #[test]
    fn test_stat_effects() {
        let mut arena = arena("Ice");
        let boost = Effect::boost(element(&arena, "Ice"), Stat::Attack, 2);
        let reduce = Effect::reduce(element(&arena, "Ice"), Stat::Speed, 8, 100);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&boost, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        let EffectSummary::StatBoost(stat) = summary else {
            panic!("expected stat boost summary");
        };
        assert_eq!(stat.effect, 2);
        assert_eq!(stat.power, 2);

        let summary =
            EffectResolver::apply(&reduce, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        let EffectSummary::StatReduce(stat) = summary else {
            panic!("expected stat reduce summary");
        };
        assert_eq!(stat.effect, 6);
        assert_eq!(arena.roster.get(arena.target).unwrap().get_stat_modifier(Stat::Speed), -6);
    }

    #[test]
    fn test_stat_effect_on_fainted_target() {
        let mut arena = arena("Ice");
        arena.roster.get_mut(arena.target).unwrap().take_damage(100);
        let boost = Effect::boost(element(&arena, "Ice"), Stat::Defense, 1);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&boost, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        let EffectSummary::StatBoost(stat) = summary else {
            panic!("expected stat boost summary");
        };
        assert_eq!(stat.effect, -1);
    }

    #[test]
    fn test_heal_reports_requested_and_restored() {
        let mut arena = arena("Ice");
        arena.roster.get_mut(arena.target).unwrap().take_damage(10);
        let heal = Effect::heal(element(&arena, "Ice"), 15);
        let mut rng = ScriptedRolls::new();

        let summary =
            EffectResolver::apply(&heal, &mut arena.roster, arena.caster, arena.target, &mut rng)
                .unwrap();
        let EffectSummary::Healing(healing) = summary else {
            panic!("expected healing summary");
        };
        assert_eq!(healing.effect, 15);
        assert_eq!(healing.restored, 10);
        assert_eq!(arena.roster.get(arena.target).unwrap().cur_hp(), 40);
    }

    #[test]
    fn test_unknown_combatant() {
        let mut arena = arena("Ice");
        let heal = Effect::heal(element(&arena, "Ice"), 5);
        let mut rng = ScriptedRolls::new();
        let ghost = CombatantId::new(9);

        let err = EffectResolver::apply(&heal, &mut arena.roster, arena.caster, ghost, &mut rng)
            .unwrap_err();
        assert_eq!(err, ResolveError::UnknownCombatant(ghost));
    }
}

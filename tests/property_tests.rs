//! Property tests for stat stages, caps, health and casting invariants.

use std::sync::Arc;

use proptest::prelude::*;

use mage_battle::content::ContentLibrary;
use mage_battle::core::{apply_stage, stage_ratio, BattleConfig, ScriptedRolls, Stat};
use mage_battle::effects::{AttackEffect, EffectResolver};
use mage_battle::elements::ElementRegistry;
use mage_battle::error::CastFailure;
use mage_battle::mage::{MageDefinition, MageManager};
use mage_battle::magic::BattleSession;
use mage_battle::spells::CastTarget;

const SPELLBOOK: &str = include_str!("fixtures/spellbook.json");

fn elements() -> ElementRegistry {
    let mut elements = ElementRegistry::new();
    elements.register("Fire", ["Ice"], ["Water"], ["Lightning"]);
    elements.register("Water", ["Fire"], ["Ice"], ["Ice"]);
    elements.register("Ice", ["Water"], ["Fire"], ["Water"]);
    elements
}

fn mage(element: &str, health: i32, attack: i32, defense: i32, speed: i32) -> MageManager {
    let definition = MageDefinition::new("Subject", element).with_stats(health, attack, defense, speed);
    MageManager::new(&definition, &elements(), &BattleConfig::default()).unwrap()
}

fn stat() -> impl Strategy<Value = Stat> {
    prop_oneof![Just(Stat::Attack), Just(Stat::Defense), Just(Stat::Speed)]
}

#[test]
fn test_stage_ratio_anchors() {
    assert_eq!(stage_ratio(0), (2, 2));
    assert_eq!(stage_ratio(6), (8, 2));
    assert_eq!(stage_ratio(-6), (2, 8));
    assert_eq!(apply_stage(20, 6), 80);
    assert_eq!(apply_stage(20, -6), 5);
}

proptest! {
    /// Higher stages never lower a stat.
    #[test]
    fn prop_stage_is_monotone(base in 0i32..500, stage in -6i32..=6) {
        prop_assert!(apply_stage(base, stage) <= apply_stage(base, stage + 1));
        prop_assert_eq!(apply_stage(base, 0), base);
    }

    /// Modifiers stay within the configured bounds and report exact deltas.
    #[test]
    fn prop_modifiers_stay_bounded(
        ops in prop::collection::vec((any::<bool>(), stat(), 0i32..10), 1..40)
    ) {
        let mut subject = mage("Fire", 25, 25, 25, 25);
        let minmax = subject.modifier_minmax();

        for (raise, stat, amount) in ops {
            let before = subject.get_stat_modifier(stat);
            let delta = if raise {
                subject.boost_stat(stat, amount)
            } else {
                subject.reduce_stat(stat, amount)
            };
            let after = subject.get_stat_modifier(stat);

            prop_assert!((-minmax..=minmax).contains(&after));
            prop_assert!((0..=amount).contains(&delta));
            prop_assert_eq!((after - before).abs(), delta);
        }
    }

    /// Damage taken never exceeds remaining health.
    #[test]
    fn prop_take_damage_is_clamped(health in 1i32..100, damage in -20i32..200) {
        let mut subject = mage("Ice", health, 0, 0, 0);
        let taken = subject.take_damage(damage);

        prop_assert_eq!(taken, damage.max(0).min(health));
        prop_assert_eq!(subject.cur_hp(), health - taken);
    }

    /// Healing never rises above maximum health.
    #[test]
    fn prop_restore_never_overheals(health in 2i32..100, damage in 1i32..100, heal in 0i32..200) {
        let mut subject = mage("Water", health, 0, 0, 0);
        subject.take_damage(damage.min(health - 1));
        let before = subject.cur_hp();

        let restored = subject.restore_health(heal);

        prop_assert!(subject.cur_hp() <= subject.max_hp());
        prop_assert_eq!(subject.cur_hp(), before + restored);
    }

    /// Over-budget stats scale down independently and land within budget.
    #[test]
    fn prop_stat_limit(health in 0i32..100, attack in 0i32..100, defense in 0i32..100, speed in 0i32..100) {
        let subject = mage("Fire", health, attack, defense, speed);
        let total = health + attack + defense + speed;
        let scaled = |v: i32| if total > 100 { 100 * v / total } else { v };

        prop_assert_eq!(subject.max_hp(), scaled(health));
        prop_assert_eq!(subject.get_base_stat(Stat::Attack), scaled(attack));
        prop_assert_eq!(subject.get_base_stat(Stat::Defense), scaled(defense));
        prop_assert_eq!(subject.get_base_stat(Stat::Speed), scaled(speed));

        let sum = subject.max_hp()
            + subject.get_base_stat(Stat::Attack)
            + subject.get_base_stat(Stat::Defense)
            + subject.get_base_stat(Stat::Speed);
        prop_assert!(sum <= 100);
    }

    /// The budget holds for any raw stats, including ones whose sum overflows `i32`.
    #[test]
    fn prop_stat_limit_full_range(
        health in any::<i32>(),
        attack in any::<i32>(),
        defense in any::<i32>(),
        speed in any::<i32>(),
    ) {
        let subject = mage("Ice", health, attack, defense, speed);
        let stats = [
            subject.max_hp(),
            subject.get_base_stat(Stat::Attack),
            subject.get_base_stat(Stat::Defense),
            subject.get_base_stat(Stat::Speed),
        ];

        prop_assert!(stats.iter().all(|&v| v >= 0));
        prop_assert!(stats.iter().map(|&v| i64::from(v)).sum::<i64>() <= 100);
        for stat in Stat::ALL {
            prop_assert!(subject.get_stat(stat) >= 0);
        }
    }

    /// Only the first four spells are kept.
    #[test]
    fn prop_spell_limit(count in 0usize..10) {
        let names: Vec<String> = (0..count).map(|i| format!("Spell {i}")).collect();
        let definition = MageDefinition::new("Scholar", "Ice")
            .with_stats(25, 25, 25, 25)
            .with_spells(names.iter().cloned());
        let subject = MageManager::new(&definition, &elements(), &BattleConfig::default()).unwrap();

        prop_assert_eq!(subject.spells(), &names[..count.min(4)]);
    }

    /// Effective accuracy is a percentage.
    #[test]
    fn prop_effective_accuracy_bounds(
        accuracy in 0i32..=100,
        attacker in 0i32..=200,
        evader in 0i32..=200,
    ) {
        let value = EffectResolver::effective_accuracy(accuracy, attacker, evader, 6);
        prop_assert!((0.0..=100.0).contains(&value));
        if attacker == evader {
            prop_assert_eq!(value, f64::from(accuracy));
        }
    }

    /// Every landed attack does at least one point of damage.
    #[test]
    fn prop_damage_is_positive(
        power in 0i32..200,
        attack in 0i32..50,
        defense in 0i32..50,
        critical in any::<bool>(),
    ) {
        let registry = elements();
        let fire = registry.lookup("Fire").unwrap();
        let effect = AttackEffect {
            element: fire,
            power,
            accuracy: 100,
            critical_hit_prob: 0,
        };
        let caster = mage("Ice", 10, attack, 10, 10);
        let target = mage("Water", 10, 10, defense, 10);

        prop_assert!(effect.compute_damage(&caster, &target, critical) >= 1);
    }

    /// A caster that cannot cast a spell leaves every combatant untouched.
    #[test]
    fn prop_incompatible_cast_changes_nothing(
        health in 1i32..40,
        attack in 0i32..20,
        defense in 0i32..20,
        speed in 0i32..20,
    ) {
        let (library, _) = ContentLibrary::from_json_str(SPELLBOOK).unwrap();
        let mut session = BattleSession::with_rng(
            Arc::new(library),
            BattleConfig::default(),
            ScriptedRolls::new(),
        );
        let caster = session
            .add_mage(&MageDefinition::new("Frost", "Ice").with_stats(health, attack, defense, speed))
            .unwrap();
        let target = session
            .add_mage(&MageDefinition::new("Leaf", "Grass").with_stats(health, attack, defense, speed))
            .unwrap();

        let result = session.cast_spell("Fireball", caster, CastTarget::Unit(target));

        prop_assert_eq!(result.reason, Some(CastFailure::CannotCast));
        for id in [caster, target] {
            let mage = session.mage(id).unwrap();
            prop_assert_eq!(mage.cur_hp(), health);
            for stat in Stat::ALL {
                prop_assert_eq!(mage.get_stat_modifier(stat), 0);
            }
        }
        prop_assert_eq!(session.rng_mut().remaining_rolls(), 0);
    }

    /// Group spells resolve targets in the order they were listed.
    #[test]
    fn prop_group_order_follows_team(order in Just(vec![0usize, 1, 2]).prop_shuffle()) {
        let (library, _) = ContentLibrary::from_json_str(SPELLBOOK).unwrap();
        let mut session = BattleSession::with_rng(
            Arc::new(library),
            BattleConfig::default(),
            ScriptedRolls::new().with_rolls([0, 99, 0, 99, 0, 99]),
        );
        let caster = session
            .add_mage(&MageDefinition::new("Pyra", "Fire").with_stats(30, 30, 20, 20))
            .unwrap();
        let foes: Vec<_> = ["Ash", "Birch", "Cedar"]
            .into_iter()
            .map(|name| {
                session
                    .add_mage(&MageDefinition::new(name, "Grass").with_stats(40, 20, 20, 20))
                    .unwrap()
            })
            .collect();
        let team: Vec<_> = order.iter().map(|&i| foes[i]).collect();

        let result = session.cast_spell("Flame Wave", caster, CastTarget::Team(team.clone()));

        let hit: Vec<_> = result.result.iter().map(|s| s.target()).collect();
        prop_assert_eq!(hit, team);
    }
}

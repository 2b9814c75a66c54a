//! Core battle types: combatant ids, stats, RNG, configuration.
//!
//! These are shared by every other module and carry no combat rules
//! of their own beyond the stat stage table.

pub mod config;
pub mod entity;
pub mod rng;
pub mod stat;

pub use config::BattleConfig;
pub use entity::CombatantId;
pub use rng::{BattleRng, RandomSource, ScriptedRolls};
pub use stat::{apply_stage, stage_ratio, ParseStatError, Stat, StatBlock};

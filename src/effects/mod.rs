//! Spell effects and their resolution.
//!
//! - `Effect`: closed set of effect kinds, one record type per kind
//! - `EffectSummary`: structured outcome of applying one effect to one target
//! - `EffectResolver`: evasion, critical hits, damage and dispatch
//!
//! ## Randomness
//!
//! Attack-family effects roll once for evasion and, when they land, once
//! more for a critical hit. Stat and healing effects never roll, so a
//! scripted source stays aligned across mixed spells.

mod effect;
mod resolver;
mod summary;

pub use effect::{
    AttackEffect, BoostStatEffect, Effect, EffectKind, HealingEffect, LeechAttackEffect,
    ReboundAttackEffect, ReduceStatEffect, DEFAULT_ACCURACY,
};
pub use resolver::EffectResolver;
pub use summary::{AttackSummary, EffectSummary, HealingSummary, StatSummary};

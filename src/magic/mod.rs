//! The casting pipeline.
//!
//! A move goes through these stages:
//!
//! 1. [`BattleSession::make_move`] checks the caster can act and asks a
//!    [`DecisionSource`] for a [`Decision`]
//! 2. The spell is looked up and the caster's knowledge checked
//! 3. The [`TargetSelector`] is resolved against the move's ally and enemy lists
//! 4. A [`CastSpell`] command runs through the [`Magic`] invoker, which
//!    checks castability, casts, and records a [`CastRecord`]
//!
//! Every outcome, including every failure, is a [`MoveResult`].

mod command;
mod decision;
mod invoker;
mod result;
mod session;

pub use command::{CastContext, CastSpell, SpellCommand};
pub use decision::{Decision, DecisionSource, TargetSelector};
pub use invoker::{CastRecord, Magic};
pub use result::MoveResult;
pub use session::BattleSession;

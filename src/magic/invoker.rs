//! Command invoker with cast history.

use serde::{Deserialize, Serialize};

use crate::core::CombatantId;
use crate::error::CastFailure;

use super::command::{CastContext, SpellCommand};
use super::result::MoveResult;

/// A recorded command with its outcome.
///
/// Used for battle logs and replays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    pub caster: CombatantId,
    pub spell: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<CastFailure>,
    /// Position in the battle, starting at 0.
    pub sequence: u32,
}

/// Runs spell commands and keeps their history.
#[derive(Clone, Debug, Default)]
pub struct Magic {
    history: Vec<CastRecord>,
    next_sequence: u32,
}

impl Magic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command` and record the outcome.
    pub fn execute(&mut self, command: &dyn SpellCommand, ctx: &mut CastContext<'_>) -> MoveResult {
        let result = command.execute(ctx);
        self.history.push(CastRecord {
            caster: command.caster(),
            spell: command.spell_name().to_string(),
            success: result.success,
            reason: result.reason,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        result
    }

    /// Every executed command, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CastRecord] {
        &self.history
    }

    /// Forget the history. Sequence numbers keep counting.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

//! Error types.
//!
//! - [`ContentError`]: content/config loading. `Io`, `Parse` and
//!   `MissingSection` abort a load; every other variant describes one
//!   skipped entry and is collected in a [`LoadReport`](crate::content::LoadReport).
//! - [`ResolveError`]: a cast referenced a combatant the roster lacks.
//! - [`DecisionError`]: a decision source could not produce a move.
//! - [`CastFailure`]: why a move attempt did not cast. Its `Display` is the
//!   reason string handed to presentation layers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CombatantId;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("content has no `{0}` collection")]
    MissingSection(&'static str),

    #[error("{kind} #{index} is not an object")]
    MalformedEntry { kind: &'static str, index: usize },

    #[error("{kind} #{index} has no name")]
    MissingName { kind: &'static str, index: usize },

    #[error("{spell} does not have an element")]
    MissingElement { spell: String },

    #[error("{spell} has invalid element {element}")]
    UnknownElement { spell: String, element: String },

    #[error("{spell} does not declare a spell type")]
    MissingSpellType { spell: String },

    #[error("{spell} has unknown spell type `{kind}`")]
    UnknownSpellType { spell: String, kind: String },

    #[error("{spell} has an effect without a type")]
    MissingEffectType { spell: String },

    #[error("{spell} has unknown effect type `{effect}`")]
    UnknownEffectType { spell: String, effect: String },

    #[error("{spell}: {effect} effect is missing `{attribute}`")]
    MissingAttribute {
        spell: String,
        effect: &'static str,
        attribute: &'static str,
    },

    #[error("{spell}: attribute `{attribute}` has invalid value `{value}`")]
    InvalidAttribute {
        spell: String,
        attribute: String,
        value: String,
    },

    #[error("{spell}: {effect} effect does not accept `{attribute}`")]
    UnexpectedAttribute {
        spell: String,
        effect: &'static str,
        attribute: String,
    },

    #[error("{mage} has unknown element {element} and default element {default} is not loaded")]
    UnknownDefaultElement {
        mage: String,
        element: String,
        default: String,
    },
}

impl ContentError {
    /// Whether this error aborts the whole load rather than one entry.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Parse(_) | Self::MissingSection(_)
        )
    }
}

/// A resolved cast referenced something the roster cannot provide.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{0} is not part of this battle")]
    UnknownCombatant(CombatantId),

    #[error("no targets to choose from")]
    NoTargets,
}

/// Failure reported by a [`DecisionSource`](crate::magic::DecisionSource).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("decision source declined to act")]
    Declined,

    #[error("decision source failed: {0}")]
    Failed(String),
}

/// Reason a move attempt did not produce a cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum CastFailure {
    #[error("fainted")]
    #[serde(rename = "fainted")]
    Fainted,

    #[error("does nothing")]
    #[serde(rename = "does nothing")]
    DoesNothing,

    #[error("bad spell")]
    #[serde(rename = "bad spell")]
    BadSpell,

    #[error("unknown spell")]
    #[serde(rename = "unknown spell")]
    UnknownSpell,

    #[error("invalid target")]
    #[serde(rename = "invalid target")]
    InvalidTarget,

    #[error("cannot cast")]
    #[serde(rename = "cannot cast")]
    CannotCast,
}

impl CastFailure {
    /// Reason string as shown to presentation layers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fainted => "fainted",
            Self::DoesNothing => "does nothing",
            Self::BadSpell => "bad spell",
            Self::UnknownSpell => "unknown spell",
            Self::InvalidTarget => "invalid target",
            Self::CannotCast => "cannot cast",
        }
    }
}

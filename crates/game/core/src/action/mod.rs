//! What a combatant can do on its turn.
//!
//! An [`Action`] is chosen by an [`crate::ai::ActionSource`] and handed to the
//! engine, which validates it against the current battle and resolves it.
//! Rejected actions still consume the actor's turn.

use crate::state::CombatantId;

/// A single turn's decision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Basic weapon (or unarmed) attack on one opponent.
    Attack { target: CombatantId },
    /// Cast the actor's skill at `index` on the listed targets.
    ///
    /// Skills flagged as hitting every enemy ignore `targets` and hit the
    /// whole opposing roster instead.
    Skill {
        index: usize,
        targets: Vec<CombatantId>,
    },
    /// Use the inventory item in `slot`. Consumables restore `target`;
    /// equipment is always put on the actor.
    UseItem { slot: usize, target: CombatantId },
    /// Do nothing.
    Pass,
}

impl Action {
    pub fn attack(target: CombatantId) -> Self {
        Self::Attack { target }
    }

    pub fn skill(index: usize, target: CombatantId) -> Self {
        Self::Skill {
            index,
            targets: vec![target],
        }
    }
}

/// Why an action was refused.
///
/// These are ordinary battle outcomes: the engine logs them and moves on to
/// the next combatant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("no skill at index {index}")]
    UnknownSkill { index: usize },

    #[error("no combatant {target} in this battle")]
    UnknownTarget { target: CombatantId },

    #[error("target {target} is already down")]
    TargetDown { target: CombatantId },

    #[error("no living target")]
    NoTargets,

    #[error("inventory slot {slot} is empty")]
    EmptySlot { slot: usize },

    #[error("{skill} needs {needed} MP, only {available} left")]
    InsufficientMp {
        skill: String,
        needed: u32,
        available: u32,
    },
}

//! Errors raised while assembling a battle.
//!
//! Nothing that happens *during* a battle is an error: failed or invalid
//! actions are ordinary outcomes recorded in the round log (see
//! [`crate::action::ActionError`]). Only malformed setup is rejected here.

use crate::state::{CombatantId, Team};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("the {0} roster is empty")]
    EmptyRoster(Team),

    #[error("combatant id {0} appears more than once")]
    DuplicateId(CombatantId),

    #[error("combatant {id} belongs to the {actual} team but was placed in the {expected} roster")]
    TeamMismatch {
        id: CombatantId,
        expected: Team,
        actual: Team,
    },
}

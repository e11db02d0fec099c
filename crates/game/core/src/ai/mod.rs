//! Turn decisions.
//!
//! The engine asks an [`ActionSource`] for one [`Action`] per living actor.
//! [`AutoPilot`] is the built-in policy: a small behavior tree that sometimes
//! casts a random affordable skill and otherwise swings at the first living
//! opponent. Front ends that want a human in the loop plug in their own
//! source and fall back to the autopilot where they like.

mod autopilot;
mod context;
mod nodes;

pub use autopilot::AutoPilot;
pub use context::{OpponentSummary, SkillSummary, TurnContext};

use crate::action::Action;
use crate::env::Dice;
use crate::state::{Combatant, CombatantId, Team};

/// Read-only view of the battle handed to decision makers.
#[derive(Clone, Copy, Debug)]
pub struct BattleView<'a> {
    combatants: &'a [Combatant],
    round: u32,
}

impl<'a> BattleView<'a> {
    pub(crate) fn new(combatants: &'a [Combatant], round: u32) -> Self {
        Self { combatants, round }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every combatant, players first, each roster in its original order.
    pub fn combatants(&self) -> &'a [Combatant] {
        self.combatants
    }

    pub fn get(&self, id: CombatantId) -> Option<&'a Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub fn roster(&self, team: Team) -> impl Iterator<Item = &'a Combatant> + 'a {
        self.combatants.iter().filter(move |c| c.team == team)
    }

    /// Members of the side opposing `team`, in roster order.
    pub fn opponents(&self, team: Team) -> impl Iterator<Item = &'a Combatant> + 'a {
        self.roster(team.opponent())
    }

    pub fn first_living_opponent(&self, team: Team) -> Option<&'a Combatant> {
        self.opponents(team).find(|c| c.is_alive())
    }
}

/// Supplies the action a combatant takes on its turn.
///
/// `dice` is the battle's own roll stream; any randomness a source needs
/// must come from it to keep battles reproducible from their seed.
pub trait ActionSource {
    fn choose(&mut self, actor: &Combatant, view: &BattleView<'_>, dice: &mut Dice) -> Action;
}

impl<F> ActionSource for F
where
    F: FnMut(&Combatant, &BattleView<'_>, &mut Dice) -> Action,
{
    fn choose(&mut self, actor: &Combatant, view: &BattleView<'_>, dice: &mut Dice) -> Action {
        self(actor, view, dice)
    }
}

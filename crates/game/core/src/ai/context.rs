//! Blackboard for the autopilot tree.

use crate::action::Action;
use crate::env::Dice;
use crate::state::{Combatant, CombatantId, Skill, Team};

use super::BattleView;

/// What the tree needs to know about one of the actor's skills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillSummary {
    pub mp_cost: u32,
    pub heals: bool,
    pub targets_all_enemies: bool,
}

impl From<&Skill> for SkillSummary {
    fn from(skill: &Skill) -> Self {
        Self {
            mp_cost: skill.mp_cost,
            heals: skill.heals(),
            targets_all_enemies: skill.targets_all_enemies,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpponentSummary {
    pub id: CombatantId,
    pub alive: bool,
}

/// Owned snapshot of the acting combatant's situation.
///
/// The tree reads from it and writes its decision into it. The dice are a
/// fork of the battle's stream; the caller adopts them afterwards so rolls
/// made while deciding are not replayed.
#[derive(Debug)]
pub struct TurnContext {
    pub actor: CombatantId,
    pub team: Team,
    pub mp: u32,
    pub skills: Vec<SkillSummary>,
    pub opponents: Vec<OpponentSummary>,
    pub skill_chance_percent: u32,
    pub dice: Dice,
    decision: Option<Action>,
}

impl TurnContext {
    pub fn new(
        actor: &Combatant,
        view: &BattleView<'_>,
        skill_chance_percent: u32,
        dice: Dice,
    ) -> Self {
        Self {
            actor: actor.id,
            team: actor.team,
            mp: actor.stats.mp,
            skills: actor.skills.iter().map(SkillSummary::from).collect(),
            opponents: view
                .opponents(actor.team)
                .map(|c| OpponentSummary {
                    id: c.id,
                    alive: c.is_alive(),
                })
                .collect(),
            skill_chance_percent,
            dice,
            decision: None,
        }
    }

    pub fn first_living_opponent(&self) -> Option<CombatantId> {
        self.opponents.iter().find(|o| o.alive).map(|o| o.id)
    }

    pub fn decide(&mut self, action: Action) {
        self.decision = Some(action);
    }

    /// Consumes the context, returning the decision and the advanced dice.
    pub fn finish(self) -> (Option<Action>, Dice) {
        (self.decision, self.dice)
    }
}

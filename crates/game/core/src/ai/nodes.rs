//! Autopilot tree nodes.
//!
//! Conditions only read the [`TurnContext`]; actions write a decision into it
//! and report whether they could.

use behavior_tree::{Behavior, Status};

use crate::action::Action;
use crate::env::RollKind;

use super::TurnContext;

/// Succeeds when the actor knows at least one skill.
pub struct HasSkills;

impl Behavior<TurnContext> for HasSkills {
    fn tick(&self, ctx: &mut TurnContext) -> Status {
        (!ctx.skills.is_empty()).into()
    }
}

/// Rolls the configured skill chance. Always consumes one roll.
pub struct RollSkillChance;

impl Behavior<TurnContext> for RollSkillChance {
    fn tick(&self, ctx: &mut TurnContext) -> Status {
        let percent = ctx.skill_chance_percent;
        ctx.dice.percent(RollKind::SkillChance, percent).into()
    }
}

/// Picks one skill uniformly at random and casts it if affordable.
///
/// Heals target the caster; skills that hit every enemy name the whole
/// opposing roster; anything else goes at the first living opponent.
pub struct CastRandomSkill;

impl Behavior<TurnContext> for CastRandomSkill {
    fn tick(&self, ctx: &mut TurnContext) -> Status {
        let Some(index) = ctx.dice.index(RollKind::SkillPick, ctx.skills.len()) else {
            return Status::Failure;
        };
        let skill = &ctx.skills[index];
        if skill.mp_cost > ctx.mp {
            tracing::trace!(actor = %ctx.actor, index, "skill pick unaffordable");
            return Status::Failure;
        }

        let targets = if skill.targets_all_enemies {
            ctx.opponents.iter().map(|o| o.id).collect()
        } else if skill.heals {
            vec![ctx.actor]
        } else {
            match ctx.first_living_opponent() {
                Some(target) => vec![target],
                None => return Status::Failure,
            }
        };

        ctx.decide(Action::Skill { index, targets });
        Status::Success
    }
}

/// Basic attack on the first living opponent in roster order.
pub struct AttackFirstLiving;

impl Behavior<TurnContext> for AttackFirstLiving {
    fn tick(&self, ctx: &mut TurnContext) -> Status {
        match ctx.first_living_opponent() {
            Some(target) => {
                ctx.decide(Action::attack(target));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

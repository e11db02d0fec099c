use std::fmt;

use behavior_tree::{Behavior, Selector, Sequence};

use crate::action::Action;
use crate::config::BattleConfig;
use crate::env::Dice;
use crate::state::Combatant;

use super::nodes::{AttackFirstLiving, CastRandomSkill, HasSkills, RollSkillChance};
use super::{ActionSource, BattleView, TurnContext};

type AutoPilotTree = Box<dyn Behavior<TurnContext>>;

/// Default decision policy.
///
/// ```text
/// Selector
///   ├─ Sequence
///   │   ├─ HasSkills
///   │   ├─ RollSkillChance
///   │   └─ CastRandomSkill
///   └─ AttackFirstLiving
/// ```
///
/// Falls back to [`Action::Pass`] when nobody is left to hit.
pub struct AutoPilot {
    tree: AutoPilotTree,
    skill_chance_percent: u32,
}

impl AutoPilot {
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            tree: Self::default_tree(),
            skill_chance_percent: config.skill_chance_percent.min(100),
        }
    }

    fn default_tree() -> AutoPilotTree {
        let try_skill: Vec<AutoPilotTree> = vec![
            Box::new(HasSkills),
            Box::new(RollSkillChance),
            Box::new(CastRandomSkill),
        ];
        let root: Vec<AutoPilotTree> = vec![
            Box::new(Sequence::new(try_skill)),
            Box::new(AttackFirstLiving),
        ];
        Box::new(Selector::new(root))
    }
}

impl Default for AutoPilot {
    fn default() -> Self {
        Self::new(&BattleConfig::default())
    }
}

impl fmt::Debug for AutoPilot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoPilot")
            .field("skill_chance_percent", &self.skill_chance_percent)
            .finish_non_exhaustive()
    }
}

impl ActionSource for AutoPilot {
    fn choose(&mut self, actor: &Combatant, view: &BattleView<'_>, dice: &mut Dice) -> Action {
        let mut ctx = TurnContext::new(actor, view, self.skill_chance_percent, dice.clone());
        let status = self.tree.tick(&mut ctx);
        let (decision, advanced) = ctx.finish();
        *dice = advanced;

        tracing::debug!(actor = %actor.name, ?status, ?decision, "autopilot decided");
        decision.unwrap_or(Action::Pass)
    }
}

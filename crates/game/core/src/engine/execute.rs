//! Action pipeline: validate, then apply.
//!
//! Validation never mutates the battle, so a rejected action leaves no trace
//! beyond its log line. Once an action passes validation it is applied in
//! full.

use crate::action::{Action, ActionError};
use crate::combat::{self, DamageOutcome};
use crate::event::{BattleEvent, Participant, RoundLog};
use crate::state::{CombatantId, EquipSlot, Item, ItemKind, Skill};

use super::Battle;

/// Log entry for an action that did not go through.
pub(super) fn rejection(actor: Participant, reason: ActionError) -> BattleEvent {
    match reason {
        ActionError::InsufficientMp { skill, .. } => BattleEvent::SkillFailed { actor, skill },
        reason => BattleEvent::Rejected { actor, reason },
    }
}

impl Battle {
    pub(super) fn execute(
        &mut self,
        actor: usize,
        action: Action,
        log: &mut RoundLog,
    ) -> Result<(), ActionError> {
        match action {
            Action::Attack { target } => {
                let target = self.living_target(target)?;
                self.apply_attack(actor, target, log);
            }
            Action::Skill { index, targets } => {
                let (skill, targets) = self.validate_skill(actor, index, &targets)?;
                self.apply_skill(actor, &skill, &targets, log);
            }
            Action::UseItem { slot, target } => {
                let item = self.combatants[actor]
                    .inventory
                    .get(slot)
                    .ok_or(ActionError::EmptySlot { slot })?;
                let target = match item.kind {
                    ItemKind::Consumable { .. } => self.living_target(target)?,
                    ItemKind::Weapon(_) | ItemKind::Armor(_) => actor,
                };
                self.apply_item(actor, slot, target, log);
            }
            Action::Pass => log.push(BattleEvent::Passed {
                actor: self.participant(actor),
            }),
        }
        Ok(())
    }

    // ===== validation =====

    fn index_of(&self, id: CombatantId) -> Result<usize, ActionError> {
        self.combatants
            .iter()
            .position(|c| c.id == id)
            .ok_or(ActionError::UnknownTarget { target: id })
    }

    fn living_target(&self, id: CombatantId) -> Result<usize, ActionError> {
        let index = self.index_of(id)?;
        if !self.combatants[index].is_alive() {
            return Err(ActionError::TargetDown { target: id });
        }
        Ok(index)
    }

    /// Resolves the skill and its target indices, and checks MP.
    ///
    /// Skills hitting every enemy take the whole opposing roster in roster
    /// order; otherwise every requested id must exist and at least one of
    /// them must be alive. Duplicate ids are hit once.
    fn validate_skill(
        &self,
        actor: usize,
        index: usize,
        requested: &[CombatantId],
    ) -> Result<(Skill, Vec<usize>), ActionError> {
        let caster = &self.combatants[actor];
        let skill = caster
            .skills
            .get(index)
            .cloned()
            .ok_or(ActionError::UnknownSkill { index })?;

        let targets: Vec<usize> = if skill.targets_all_enemies {
            let opposing = caster.team.opponent();
            (0..self.combatants.len())
                .filter(|&i| self.combatants[i].team == opposing)
                .collect()
        } else {
            let mut targets = Vec::with_capacity(requested.len());
            for &id in requested {
                let target = self.index_of(id)?;
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
            targets
        };

        if !targets.iter().any(|&i| self.combatants[i].is_alive()) {
            return Err(match requested {
                [only] if !skill.targets_all_enemies => ActionError::TargetDown { target: *only },
                _ => ActionError::NoTargets,
            });
        }

        if caster.stats.mp < skill.mp_cost {
            return Err(ActionError::InsufficientMp {
                skill: skill.name,
                needed: skill.mp_cost,
                available: caster.stats.mp,
            });
        }

        Ok((skill, targets))
    }

    // ===== application =====

    fn participant(&self, index: usize) -> Participant {
        Participant::from(&self.combatants[index])
    }

    fn apply_attack(&mut self, actor: usize, target: usize, log: &mut RoundLog) {
        let roll = combat::roll_basic_attack(&self.combatants[actor], &self.config, &mut self.dice);
        if roll.critical {
            log.push(BattleEvent::CriticalHit {
                actor: self.participant(actor),
                skill: false,
            });
        }

        let outcome = self.combatants[target].take_damage(roll.amount, roll.damage_type);
        log.push(BattleEvent::Attacked {
            actor: self.participant(actor),
            target: self.participant(target),
            raw: roll.amount,
            dealt: outcome.dealt,
            damage_type: roll.damage_type,
        });
        self.log_death(target, outcome, log);
    }

    /// Damage pass, then heal pass, then one copy of the effect on every
    /// target still standing.
    fn apply_skill(&mut self, actor: usize, skill: &Skill, targets: &[usize], log: &mut RoundLog) {
        let caster_id = self.combatants[actor].id;
        // Validated above.
        self.combatants[actor].spend_mp(skill.mp_cost);
        log.push(BattleEvent::SkillUsed {
            actor: self.participant(actor),
            skill: skill.name.clone(),
        });

        if skill.deals_damage() {
            for &target in targets {
                if !self.combatants[target].is_alive() {
                    continue;
                }
                let roll =
                    combat::roll_skill(&self.combatants[actor], skill, &self.config, &mut self.dice);
                if roll.critical {
                    log.push(BattleEvent::CriticalHit {
                        actor: self.participant(actor),
                        skill: true,
                    });
                }
                let outcome = self.combatants[target].take_damage(roll.amount, roll.damage_type);
                log.push(BattleEvent::SkillDamage {
                    actor: self.participant(actor),
                    target: self.participant(target),
                    skill: skill.name.clone(),
                    raw: roll.amount,
                    dealt: outcome.dealt,
                });
                self.log_death(target, outcome, log);
            }
        }

        if skill.heals() {
            for &target in targets {
                if !self.combatants[target].is_alive() {
                    continue;
                }
                let amount = self.combatants[target].heal(skill.heal_amount);
                log.push(BattleEvent::Healed {
                    actor: self.participant(actor),
                    target: self.participant(target),
                    amount,
                });
            }
        }

        if let Some(template) = &skill.effect {
            for &target in targets {
                if !self.combatants[target].is_alive() {
                    continue;
                }
                let effect = template.instantiate(caster_id);
                let (name, duration) = (effect.name.clone(), effect.remaining);
                if self.combatants[target].add_effect(effect) {
                    log.push(BattleEvent::EffectGained {
                        target: self.participant(target),
                        effect: name,
                        duration,
                    });
                }
            }
        }
    }

    fn apply_item(&mut self, actor: usize, slot: usize, target: usize, log: &mut RoundLog) {
        let Some(item) = self.combatants[actor].inventory.remove(slot) else {
            return;
        };
        let Item { name, kind, .. } = item;

        match kind {
            ItemKind::Consumable { heal_hp, heal_mp } => {
                let hp = self.combatants[target].heal(heal_hp);
                let mp = self.combatants[target].restore_mp(heal_mp);
                log.push(BattleEvent::ItemUsed {
                    actor: self.participant(actor),
                    target: self.participant(target),
                    item: name,
                    hp,
                    mp,
                });
            }
            ItemKind::Weapon(weapon) => {
                let previous = self.combatants[actor].equip_weapon(weapon);
                log.push(BattleEvent::Equipped {
                    actor: self.participant(actor),
                    slot: EquipSlot::Weapon,
                    item: name,
                });
                if let Some(previous) = previous {
                    self.combatants[actor].inventory.add(Item::weapon(previous));
                }
            }
            ItemKind::Armor(armor) => {
                let previous = self.combatants[actor].equip_armor(armor);
                log.push(BattleEvent::Equipped {
                    actor: self.participant(actor),
                    slot: EquipSlot::Armor,
                    item: name,
                });
                if let Some(previous) = previous {
                    self.combatants[actor].inventory.add(Item::armor(previous));
                }
            }
        }
    }

    fn log_death(&self, target: usize, outcome: DamageOutcome, log: &mut RoundLog) {
        if outcome.killed {
            log.push(BattleEvent::Died {
                target: self.participant(target),
            });
        }
    }
}

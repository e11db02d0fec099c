//! Battle log.
//!
//! Every observable thing that happens during a round is recorded as a
//! [`BattleEvent`], in the order it happened. Events render to the one-line
//! messages a console front end prints.

use std::fmt;

use crate::action::ActionError;
use crate::combat::DamageType;
use crate::state::{Combatant, CombatantId, EquipSlot, Team};

/// A combatant as named in an event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: CombatantId,
    pub name: String,
}

impl From<&Combatant> for Participant {
    fn from(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id,
            name: combatant.name.clone(),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
    },
    Thinking {
        actor: Participant,
    },
    CriticalHit {
        actor: Participant,
        skill: bool,
    },
    /// Basic attack landed. `raw` is the pre-mitigation roll.
    Attacked {
        actor: Participant,
        target: Participant,
        raw: i32,
        dealt: u32,
        damage_type: DamageType,
    },
    SkillUsed {
        actor: Participant,
        skill: String,
    },
    /// Not enough MP; nothing else happened.
    SkillFailed {
        actor: Participant,
        skill: String,
    },
    SkillDamage {
        actor: Participant,
        target: Participant,
        skill: String,
        raw: i32,
        dealt: u32,
    },
    /// `amount` is the HP actually restored.
    Healed {
        actor: Participant,
        target: Participant,
        amount: u32,
    },
    ItemUsed {
        actor: Participant,
        target: Participant,
        item: String,
        hp: u32,
        mp: u32,
    },
    Equipped {
        actor: Participant,
        slot: EquipSlot,
        item: String,
    },
    EffectGained {
        target: Participant,
        effect: String,
        duration: u32,
    },
    EffectEnded {
        target: Participant,
        effect: String,
    },
    DamageOverTime {
        target: Participant,
        amount: u32,
    },
    Died {
        target: Participant,
    },
    Rejected {
        actor: Participant,
        reason: ActionError,
    },
    Passed {
        actor: Participant,
    },
    Victory {
        winner: Team,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStarted { round } => write!(f, "=== Round {round} ==="),
            Self::Thinking { actor } => write!(f, "{actor} is thinking..."),
            Self::CriticalHit { actor, skill: false } => write!(f, "Critical hit! ({actor})"),
            Self::CriticalHit { actor, skill: true } => write!(f, "Skill crit! ({actor})"),
            Self::Attacked {
                actor,
                target,
                dealt,
                damage_type,
                ..
            } => write!(f, "{actor} attacks {target} for {dealt} damage ({damage_type})"),
            Self::SkillUsed { actor, skill } => write!(f, "{actor} uses skill {skill}"),
            Self::SkillFailed { actor, skill } => write!(f, "{actor} lacks MP for {skill}"),
            Self::SkillDamage {
                actor,
                target,
                skill,
                dealt,
                ..
            } => write!(f, "{actor} deals {dealt} damage to {target} with {skill}"),
            Self::Healed {
                actor,
                target,
                amount,
            } => write!(f, "{actor} heals {target} for {amount} HP"),
            Self::ItemUsed {
                actor,
                target,
                item,
                hp,
                mp,
            } => {
                if actor.id == target.id {
                    write!(f, "{actor} uses {item}")?;
                } else {
                    write!(f, "{actor} uses {item} on {target}")?;
                }
                write!(f, " (+{hp} HP, +{mp} MP)")
            }
            Self::Equipped { actor, slot, item } => write!(f, "{actor} equips {slot}: {item}"),
            Self::EffectGained {
                target,
                effect,
                duration,
            } => write!(f, "{target} gains effect: {effect} (dur={duration})"),
            Self::EffectEnded { target, effect } => write!(f, "Effect {effect} on {target} ended"),
            Self::DamageOverTime { target, amount } => {
                write!(f, "{target} takes {amount} DOT damage")
            }
            Self::Died { target } => write!(f, "{target} died!"),
            Self::Rejected { actor, reason } => write!(f, "{actor} fumbles: {reason}"),
            Self::Passed { actor } => write!(f, "{actor} holds position"),
            Self::Victory {
                winner: Team::Player,
            } => f.write_str("Players win!"),
            Self::Victory {
                winner: Team::Enemy,
            } => f.write_str("Enemies win!"),
        }
    }
}

/// Ordered events produced by one round.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundLog {
    pub round: u32,
    pub events: Vec<BattleEvent>,
}

impl RoundLog {
    pub(crate) fn new(round: u32) -> Self {
        Self {
            round,
            events: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, event: BattleEvent) {
        tracing::trace!(round = self.round, %event, "battle event");
        self.events.push(event);
    }

    /// The events rendered as console lines.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Winner announced in this round, if the battle ended here.
    pub fn winner(&self) -> Option<Team> {
        self.events.iter().find_map(|event| match event {
            BattleEvent::Victory { winner } => Some(*winner),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn who(id: u32, name: &str) -> Participant {
        Participant {
            id: CombatantId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn lines_match_console_format() {
        let hero = who(1, "Hero");
        let goblin = who(3, "Goblin");
        let log = RoundLog {
            round: 2,
            events: vec![
                BattleEvent::RoundStarted { round: 2 },
                BattleEvent::CriticalHit {
                    actor: hero.clone(),
                    skill: false,
                },
                BattleEvent::Attacked {
                    actor: hero.clone(),
                    target: goblin.clone(),
                    raw: 12,
                    dealt: 11,
                    damage_type: DamageType::Physical,
                },
                BattleEvent::Died {
                    target: goblin.clone(),
                },
                BattleEvent::EffectGained {
                    target: hero.clone(),
                    effect: "Burn".into(),
                    duration: 3,
                },
                BattleEvent::Victory {
                    winner: Team::Player,
                },
            ],
        };

        assert_eq!(
            log.lines(),
            vec![
                "=== Round 2 ===",
                "Critical hit! (Hero)",
                "Hero attacks Goblin for 11 damage (physical)",
                "Goblin died!",
                "Hero gains effect: Burn (dur=3)",
                "Players win!",
            ]
        );
        assert_eq!(log.winner(), Some(Team::Player));
    }

    #[test]
    fn equip_line_names_the_slot() {
        let event = BattleEvent::Equipped {
            actor: who(1, "Hero"),
            slot: EquipSlot::Armor,
            item: "Leather".into(),
        };
        assert_eq!(event.to_string(), "Hero equips armor: Leather");
    }

    #[test]
    fn rejected_line_carries_reason() {
        let event = BattleEvent::Rejected {
            actor: who(2, "Cleric"),
            reason: ActionError::UnknownSkill { index: 4 },
        };
        assert_eq!(event.to_string(), "Cleric fumbles: no skill at index 4");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn events_export_as_tagged_json() {
        let event = BattleEvent::Victory {
            winner: Team::Enemy,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Victory":{"winner":"enemy"}}"#);
    }
}

//! Raw damage rolls for basic attacks and damaging skills.
//!
//! Rolls are consumed in a fixed order (damage, jitter, critical) so that the
//! same seed always reproduces the same numbers.

use crate::config::BattleConfig;
use crate::env::{Dice, RollKind};
use crate::state::{Combatant, Skill};

use super::DamageType;

/// Pre-mitigation damage produced by an attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRoll {
    pub amount: i32,
    pub critical: bool,
    pub damage_type: DamageType,
}

/// Roll a basic attack.
///
/// ```text
/// raw = random(weapon_min..=weapon_max) + effective_attack
/// if crit: raw = trunc(raw * crit_multiplier)
/// ```
///
/// Without a weapon the unarmed profile from `config` is used.
pub fn roll_basic_attack(
    attacker: &Combatant,
    config: &BattleConfig,
    dice: &mut Dice,
) -> AttackRoll {
    let (min, max, damage_type) = match attacker.weapon() {
        Some(weapon) => {
            let (min, max) = weapon.damage_range();
            (min, max, weapon.damage_type)
        }
        None => (
            config.unarmed.min_damage,
            config.unarmed.max_damage,
            config.unarmed.damage_type,
        ),
    };

    let base = dice.range(RollKind::WeaponDamage, min, max) + attacker.effective_attack();
    let (amount, critical) = roll_critical(attacker, base, dice);

    AttackRoll {
        amount,
        critical,
        damage_type,
    }
}

/// Roll one application of a damaging skill against one target.
///
/// Physical and pure skills scale with effective attack, magic skills with
/// base magic power. Jitter is added before the critical roll.
pub fn roll_skill(
    attacker: &Combatant,
    skill: &Skill,
    config: &BattleConfig,
    dice: &mut Dice,
) -> AttackRoll {
    let scaling = match skill.damage_type {
        DamageType::Physical | DamageType::Pure => attacker.effective_attack(),
        DamageType::Magic => attacker.stats.magic_power,
    };
    let power = scale(scaling, skill.damage_multiplier);
    let jitter = i32::try_from(config.skill_jitter).unwrap_or(i32::MAX);
    let base = power.saturating_add(dice.range(RollKind::Jitter, -jitter, jitter));
    let (amount, critical) = roll_critical(attacker, base, dice);

    AttackRoll {
        amount,
        critical,
        damage_type: skill.damage_type,
    }
}

fn roll_critical(attacker: &Combatant, base: i32, dice: &mut Dice) -> (i32, bool) {
    if dice.chance(RollKind::Critical, attacker.stats.crit_rate) {
        (scale(base, attacker.stats.crit_multiplier), true)
    } else {
        (base, false)
    }
}

/// Multiply and truncate toward zero.
fn scale(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor) as i32
}

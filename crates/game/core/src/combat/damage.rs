//! Damage types and mitigation.

use crate::state::Combatant;

/// Every hit deals at least this much, whatever the target's defenses.
pub const MIN_DAMAGE: u32 = 1;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage classification. Selects which defensive stat mitigates a hit.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DamageType {
    /// Weapons and brute force. Reduced by half the target's defense.
    #[default]
    Physical,
    /// Spells. Reduced by half the target's resistance.
    Magic,
    /// Ignores all mitigation.
    Pure,
}

impl DamageType {
    /// Amount subtracted from a raw hit of this type against `target`.
    pub fn mitigation(self, target: &Combatant) -> i32 {
        match self {
            Self::Physical => physical_mitigation(target),
            Self::Magic => magic_mitigation(target),
            Self::Pure => 0,
        }
    }
}

fn physical_mitigation(target: &Combatant) -> i32 {
    target.effective_defense() / 2
}

// Armor resistance bonuses do not reach this rule.
fn magic_mitigation(target: &Combatant) -> i32 {
    target.stats.resistance / 2
}

// ============================================================================
// Damage Application
// ============================================================================

/// Result of applying one hit to a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// HP actually removed (after mitigation, before clamping to zero HP).
    pub dealt: u32,
    /// Whether this hit brought the target to zero HP.
    pub killed: bool,
}

/// Calculate the damage a hit of `raw` points deals to `target`.
///
/// # Formula
///
/// ```text
/// physical: raw - effective_defense / 2
/// magic:    raw - resistance / 2
/// pure:     raw
///
/// final = max(MIN_DAMAGE, result)
/// ```
///
/// Halving truncates toward zero, so negative defenses add damage.
pub fn mitigate(raw: i32, kind: DamageType, target: &Combatant) -> u32 {
    let actual = i64::from(raw) - i64::from(kind.mitigation(target));
    actual.clamp(i64::from(MIN_DAMAGE), i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Armor, CombatantId, Stats, Team};

    fn target(defense: i32, resistance: i32) -> Combatant {
        let stats = Stats::builder()
            .max_hp(40)
            .defense(defense)
            .resistance(resistance)
            .build();
        Combatant::new(CombatantId(9), "Dummy", Team::Enemy, stats)
    }

    #[test]
    fn physical_uses_half_defense() {
        assert_eq!(mitigate(10, DamageType::Physical, &target(3, 0)), 9);
        assert_eq!(mitigate(10, DamageType::Physical, &target(8, 0)), 6);
    }

    #[test]
    fn magic_uses_half_resistance() {
        let t = target(100, 5);
        assert_eq!(mitigate(10, DamageType::Magic, &t), 8);
    }

    #[test]
    fn magic_ignores_armor_resistance() {
        let t = target(0, 0).with_armor(Armor::new("Robe").with_resistance_bonus(10));
        assert_eq!(mitigate(10, DamageType::Magic, &t), 10);

        let t = target(0, 2).with_armor(Armor::new("Robe").with_resistance_bonus(4));
        assert_eq!(mitigate(10, DamageType::Magic, &t), 9);
    }

    #[test]
    fn pure_ignores_defenses() {
        assert_eq!(mitigate(4, DamageType::Pure, &target(50, 50)), 4);
    }

    #[test]
    fn floor_is_one() {
        let t = target(1_000, 1_000);
        assert_eq!(mitigate(0, DamageType::Physical, &t), MIN_DAMAGE);
        assert_eq!(mitigate(3, DamageType::Magic, &t), MIN_DAMAGE);
        assert_eq!(mitigate(-20, DamageType::Pure, &t), MIN_DAMAGE);
    }

    #[test]
    fn names_are_lowercase() {
        assert_eq!(DamageType::Magic.to_string(), "magic");
        assert_eq!("pure".parse::<DamageType>().ok(), Some(DamageType::Pure));
        assert_eq!(DamageType::default(), DamageType::Physical);
    }
}

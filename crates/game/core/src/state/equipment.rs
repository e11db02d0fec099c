//! Weapon and armor slots.
//!
//! A combatant has at most one weapon and one armor. Equipping replaces the
//! current piece and hands it back; the HP side effects of armor are applied
//! by [`super::Combatant`], which owns the stats they modify.

use crate::combat::DamageType;

/// Weapon record: base damage range, damage type and flat stat bonuses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub min_damage: i32,
    pub max_damage: i32,
    pub damage_type: DamageType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_bonus: i32,
    /// Kept with the weapon; skill power reads base magic only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_bonus: i32,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        min_damage: i32,
        max_damage: i32,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name: name.into(),
            min_damage,
            max_damage,
            damage_type,
            attack_bonus: 0,
            magic_bonus: 0,
        }
    }

    pub fn with_attack_bonus(mut self, bonus: i32) -> Self {
        self.attack_bonus = bonus;
        self
    }

    pub fn with_magic_bonus(mut self, bonus: i32) -> Self {
        self.magic_bonus = bonus;
        self
    }

    /// Damage range as `(low, high)`, tolerating a reversed definition.
    pub fn damage_range(&self) -> (i32, i32) {
        if self.min_damage <= self.max_damage {
            (self.min_damage, self.max_damage)
        } else {
            (self.max_damage, self.min_damage)
        }
    }
}

/// Armor record: flat defense/resistance bonuses and an HP bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_bonus: i32,
    /// Kept with the armor; magic mitigation reads base resistance only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistance_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp_bonus: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defense_bonus: 0,
            resistance_bonus: 0,
            hp_bonus: 0,
        }
    }

    pub fn with_defense_bonus(mut self, bonus: i32) -> Self {
        self.defense_bonus = bonus;
        self
    }

    pub fn with_resistance_bonus(mut self, bonus: i32) -> Self {
        self.resistance_bonus = bonus;
        self
    }

    pub fn with_hp_bonus(mut self, bonus: u32) -> Self {
        self.hp_bonus = bonus;
        self
    }
}

/// Equipment slot kind, used in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// Currently equipped pieces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips a weapon, returning the previously equipped one if any.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    /// Equips armor, returning the previously equipped one if any.
    pub(crate) fn equip_armor(&mut self, armor: Armor) -> Option<Armor> {
        self.armor.replace(armor)
    }

    pub(crate) fn unequip_armor(&mut self) -> Option<Armor> {
        self.armor.take()
    }

    pub fn attack_bonus(&self) -> i32 {
        self.weapon.as_ref().map_or(0, |w| w.attack_bonus)
    }

    pub fn defense_bonus(&self) -> i32 {
        self.armor.as_ref().map_or(0, |a| a.defense_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_weapon_returns_previous() {
        let mut equipment = Equipment::empty();
        let sword = Weapon::new("Sword", 3, 6, DamageType::Physical).with_attack_bonus(1);
        let staff = Weapon::new("Staff", 1, 3, DamageType::Magic).with_magic_bonus(1);

        assert_eq!(equipment.equip_weapon(sword.clone()), None);
        assert_eq!(equipment.attack_bonus(), 1);
        assert_eq!(equipment.equip_weapon(staff), Some(sword));
        assert_eq!(equipment.attack_bonus(), 0);
        assert_eq!(equipment.weapon.as_ref().map(|w| w.magic_bonus), Some(1));
    }

    #[test]
    fn reversed_damage_range_is_normalised() {
        let odd = Weapon::new("Odd", 8, 5, DamageType::Physical);
        assert_eq!(odd.damage_range(), (5, 8));
    }

    #[test]
    fn bonuses_default_to_zero_when_empty() {
        let equipment = Equipment::empty();
        assert_eq!(equipment.attack_bonus(), 0);
        assert_eq!(equipment.defense_bonus(), 0);
    }
}

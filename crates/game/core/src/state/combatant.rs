use std::fmt;

use super::{
    Armor, Equipment, Inventory, Item, Skill, Stats, StatusEffect, StatusEffects, Weapon,
};
use crate::combat::{self, DamageOutcome, DamageType};

/// Identifier of a combatant, unique within a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side of the battle a combatant fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// One participant in a battle.
///
/// Once `hp` reaches zero the combatant is dead for the rest of the battle:
/// healing never revives it, and it is skipped for acting and targeting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub team: Team,
    pub stats: Stats,
    pub skills: Vec<Skill>,
    pub inventory: Inventory,
    equipment: Equipment,
    effects: StatusEffects,
    alive: bool,
}

impl Combatant {
    pub fn new(id: CombatantId, name: impl Into<String>, team: Team, stats: Stats) -> Self {
        let alive = stats.hp > 0;
        Self {
            id,
            name: name.into(),
            team,
            stats,
            skills: Vec::new(),
            inventory: Inventory::default(),
            equipment: Equipment::empty(),
            effects: StatusEffects::empty(),
            alive,
        }
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.add(item);
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.equip_weapon(weapon);
        self
    }

    pub fn with_armor(mut self, armor: Armor) -> Self {
        self.equip_armor(armor);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.equipment.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&Armor> {
        self.equipment.armor.as_ref()
    }

    pub fn effects(&self) -> &StatusEffects {
        &self.effects
    }

    // ===== equipment =====

    /// Equips a weapon, returning the one it replaced.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.equipment.equip_weapon(weapon)
    }

    /// Equips armor, returning the piece it replaced.
    ///
    /// The replaced piece is unequipped first (reversing its HP bonus), then
    /// the new bonus raises both maximum and current HP.
    pub fn equip_armor(&mut self, armor: Armor) -> Option<Armor> {
        let previous = self.unequip_armor();
        self.stats.grow_max_hp(armor.hp_bonus);
        self.equipment.equip_armor(armor);
        previous
    }

    /// Removes armor, taking back its HP bonus from both maximum and current
    /// HP. Current HP never drops below 1 this way.
    pub fn unequip_armor(&mut self) -> Option<Armor> {
        let armor = self.equipment.unequip_armor()?;
        self.stats.shrink_max_hp(armor.hp_bonus);
        Some(armor)
    }

    // ===== effective stats =====

    pub fn effective_attack(&self) -> i32 {
        self.stats.attack + self.equipment.attack_bonus() + self.effects.attack_delta()
    }

    pub fn effective_defense(&self) -> i32 {
        self.stats.defense + self.equipment.defense_bonus() + self.effects.defense_delta()
    }

    pub fn effective_speed(&self) -> i32 {
        self.stats.speed + self.effects.speed_delta()
    }

    // ===== resources =====

    /// Applies a hit of `raw` damage through the mitigation rule for `kind`.
    ///
    /// At least one point is always dealt. Hits on a dead combatant are
    /// ignored and report zero damage.
    pub fn take_damage(&mut self, raw: i32, kind: DamageType) -> DamageOutcome {
        if !self.alive {
            return DamageOutcome::default();
        }
        let dealt = combat::mitigate(raw, kind, self);
        self.stats.hp = self.stats.hp.saturating_sub(dealt);
        let killed = self.stats.hp == 0;
        if killed {
            self.alive = false;
        }
        DamageOutcome { dealt, killed }
    }

    /// Restores HP up to the maximum; returns the HP gained. Dead combatants
    /// cannot be healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        self.stats.heal(amount)
    }

    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        self.stats.restore_mp(amount)
    }

    pub fn spend_mp(&mut self, cost: u32) -> bool {
        self.stats.spend_mp(cost)
    }

    // ===== effects =====

    /// Attaches an effect; returns whether it was attached.
    pub fn add_effect(&mut self, effect: StatusEffect) -> bool {
        self.effects.add(effect)
    }

    pub(crate) fn tick_effects(&mut self) -> Vec<StatusEffect> {
        self.effects.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Combatant {
        let stats = Stats::builder()
            .max_hp(60)
            .max_mp(30)
            .attack(6)
            .defense(3)
            .magic_power(4)
            .resistance(2)
            .speed(7)
            .build();
        Combatant::new(CombatantId(1), "Hero", Team::Player, stats)
    }

    #[test]
    fn effective_stats_include_equipment_and_effects() {
        let mut hero = hero()
            .with_weapon(Weapon::new("Sword", 3, 6, DamageType::Physical).with_attack_bonus(1))
            .with_armor(Armor::new("Leather").with_defense_bonus(1).with_resistance_bonus(2));
        hero.add_effect(
            StatusEffect::new("Haste", 2)
                .with_speed_delta(3)
                .with_attack_delta(-2),
        );

        assert_eq!(hero.effective_attack(), 6 + 1 - 2);
        assert_eq!(hero.effective_defense(), 3 + 1);
        assert_eq!(hero.effective_speed(), 7 + 3);
    }

    #[test]
    fn armor_hp_bonus_round_trips() {
        let mut hero = hero();
        let before = (hero.stats.max_hp, hero.stats.hp);

        hero.equip_armor(Armor::new("Leather").with_hp_bonus(5));
        assert_eq!((hero.stats.max_hp, hero.stats.hp), (65, 65));

        let removed = hero.unequip_armor();
        assert!(removed.is_some());
        assert_eq!((hero.stats.max_hp, hero.stats.hp), before);
    }

    #[test]
    fn unequip_takes_back_bonus_hp() {
        let mut hero = hero().with_armor(Armor::new("Plate").with_hp_bonus(10));
        hero.stats.hp = 68;
        hero.unequip_armor();
        assert_eq!((hero.stats.max_hp, hero.stats.hp), (60, 58));
    }

    #[test]
    fn armor_round_trip_below_full_hp() {
        let mut hero = hero();
        hero.stats.hp = 1;
        hero.equip_armor(Armor::new("Shell").with_hp_bonus(1));
        assert_eq!((hero.stats.max_hp, hero.stats.hp), (61, 2));
        hero.unequip_armor();
        assert_eq!((hero.stats.max_hp, hero.stats.hp), (60, 1));
    }

    #[test]
    fn unequip_never_kills() {
        let mut hero = hero().with_armor(Armor::new("Plate").with_hp_bonus(10));
        hero.stats.hp = 4;
        hero.unequip_armor();
        assert_eq!(hero.stats.hp, 1);
        assert!(hero.is_alive());
    }

    #[test]
    fn replacing_armor_reverses_previous_bonus() {
        let mut hero = hero().with_armor(Armor::new("Leather").with_hp_bonus(5));
        let previous = hero.equip_armor(Armor::new("Chain").with_hp_bonus(8));

        assert_eq!(previous.map(|a| a.name), Some("Leather".to_string()));
        assert_eq!((hero.stats.max_hp, hero.stats.hp), (68, 68));
    }

    #[test]
    fn death_is_permanent() {
        let mut hero = hero();
        let outcome = hero.take_damage(500, DamageType::Pure);
        assert!(outcome.killed);
        assert_eq!(hero.stats.hp, 0);
        assert!(!hero.is_alive());

        assert_eq!(hero.heal(50), 0);
        assert_eq!(hero.stats.hp, 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn team_parses_from_lowercase() {
        assert_eq!("enemy".parse::<Team>().ok(), Some(Team::Enemy));
        assert_eq!(Team::Player.to_string(), "player");
        assert_eq!(Team::Player.opponent(), Team::Enemy);
    }
}

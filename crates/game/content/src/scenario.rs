//! Scenario definitions.
//!
//! A scenario is a pair of rosters described as plain data. Specs carry the
//! base stats of a combatant at full HP/MP; armor bonuses are applied when the
//! combatant is spawned, exactly as if it had equipped the piece itself.

use battle_core::{
    Armor, Battle, BattleConfig, BattleError, Combatant, CombatantId, Item, Skill, Stats, Team,
    Weapon,
};

/// Base stats of a combatant spec. Missing fields default to zero, except the
/// crit multiplier which defaults to `1.0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatsSpec {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: i32,
    pub defense: i32,
    pub magic_power: i32,
    pub resistance: i32,
    pub speed: i32,
    pub crit_rate: f64,
    pub crit_multiplier: f64,
}

impl Default for StatsSpec {
    fn default() -> Self {
        Self {
            max_hp: 0,
            max_mp: 0,
            attack: 0,
            defense: 0,
            magic_power: 0,
            resistance: 0,
            speed: 0,
            crit_rate: 0.0,
            crit_multiplier: 1.0,
        }
    }
}

impl StatsSpec {
    pub fn build(&self) -> Stats {
        Stats::builder()
            .max_hp(self.max_hp)
            .max_mp(self.max_mp)
            .attack(self.attack)
            .defense(self.defense)
            .magic_power(self.magic_power)
            .resistance(self.resistance)
            .speed(self.speed)
            .crit(self.crit_rate, self.crit_multiplier)
            .build()
    }
}

/// One combatant as written in a scenario file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub id: u32,
    pub name: String,
    pub stats: StatsSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<Weapon>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: Option<Armor>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
}

impl CombatantSpec {
    /// Creates a live combatant on `team` at full HP/MP with its gear worn.
    pub fn spawn(&self, team: Team) -> Combatant {
        let mut combatant =
            Combatant::new(CombatantId(self.id), self.name.clone(), team, self.stats.build());
        if let Some(weapon) = &self.weapon {
            combatant.equip_weapon(weapon.clone());
        }
        if let Some(armor) = &self.armor {
            combatant.equip_armor(armor.clone());
        }
        combatant.skills.extend(self.skills.iter().cloned());
        for item in &self.items {
            combatant.inventory.add(item.clone());
        }
        combatant
    }
}

/// A complete battle setup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Preferred seed; callers may override it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
    pub players: Vec<CombatantSpec>,
    pub enemies: Vec<CombatantSpec>,
}

impl ScenarioSpec {
    pub fn roster(&self, team: Team) -> Vec<Combatant> {
        let specs = match team {
            Team::Player => &self.players,
            Team::Enemy => &self.enemies,
        };
        specs.iter().map(|spec| spec.spawn(team)).collect()
    }

    /// Spawns both rosters into a fresh battle.
    pub fn battle(&self, seed: u64, config: BattleConfig) -> Result<Battle, BattleError> {
        tracing::debug!(scenario = %self.name, seed, "spawning scenario");
        Battle::builder()
            .players(self.roster(Team::Player))
            .enemies(self.roster(Team::Enemy))
            .seed(seed)
            .config(config)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::DamageType;

    fn knight() -> CombatantSpec {
        CombatantSpec {
            id: 7,
            name: "Knight".into(),
            stats: StatsSpec {
                max_hp: 40,
                defense: 2,
                ..StatsSpec::default()
            },
            weapon: Some(Weapon::new("Mace", 2, 5, DamageType::Physical)),
            armor: Some(Armor::new("Mail").with_defense_bonus(2).with_hp_bonus(6)),
            skills: vec![Skill::heal("mend", "Mend", 4, 10)],
            items: vec![Item::consumable("potion", "Potion", 15, 0)],
        }
    }

    #[test]
    fn spawn_wears_gear_at_full_health() {
        let knight = knight().spawn(Team::Player);

        assert_eq!(knight.id, CombatantId(7));
        assert_eq!((knight.stats.max_hp, knight.stats.hp), (46, 46));
        assert_eq!(knight.effective_defense(), 4);
        assert_eq!(knight.weapon().map(|w| w.name.as_str()), Some("Mace"));
        assert_eq!(knight.skills.len(), 1);
        assert_eq!(knight.inventory.len(), 1);
        assert!(knight.is_alive());
    }

    #[test]
    fn default_crit_multiplier_is_neutral() {
        let stats = StatsSpec::default().build();
        assert_eq!(stats.crit_multiplier, 1.0);
        assert_eq!(stats.crit_rate, 0.0);
    }

    #[test]
    fn empty_roster_is_rejected() {
        let scenario = ScenarioSpec {
            name: "Lonely".into(),
            description: String::new(),
            seed: None,
            players: vec![knight()],
            enemies: Vec::new(),
        };
        assert_eq!(
            scenario.battle(1, BattleConfig::default()).err(),
            Some(BattleError::EmptyRoster(Team::Enemy))
        );
    }
}

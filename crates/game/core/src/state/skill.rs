use super::StatusEffect;
use crate::combat::DamageType;

/// A castable skill.
///
/// A skill may deal damage (`damage_multiplier > 0`), heal (`heal_amount > 0`),
/// both, or neither; the optional effect template is attached to every target
/// the skill reaches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_type: DamageType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heal_amount: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub targets_all_enemies: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<StatusEffect>,
}

impl Skill {
    /// A damaging skill.
    pub fn damage(
        id: impl Into<String>,
        name: impl Into<String>,
        mp_cost: u32,
        damage_multiplier: f64,
        damage_type: DamageType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            mp_cost,
            damage_multiplier,
            damage_type,
            heal_amount: 0,
            targets_all_enemies: false,
            effect: None,
        }
    }

    /// A healing skill.
    pub fn heal(
        id: impl Into<String>,
        name: impl Into<String>,
        mp_cost: u32,
        heal_amount: u32,
    ) -> Self {
        Self {
            heal_amount,
            ..Self::damage(id, name, mp_cost, 0.0, DamageType::Magic)
        }
    }

    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn hitting_all_enemies(mut self) -> Self {
        self.targets_all_enemies = true;
        self
    }

    pub fn deals_damage(&self) -> bool {
        self.damage_multiplier > 0.0
    }

    pub fn heals(&self) -> bool {
        self.heal_amount > 0
    }
}

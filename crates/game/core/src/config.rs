use crate::combat::DamageType;

/// Battle tuning constants and runtime-tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Chance (0-100) that the autopilot tries a skill before falling back
    /// to a basic attack.
    pub skill_chance_percent: u32,
    /// Skill damage is jittered uniformly within `-skill_jitter..=skill_jitter`.
    pub skill_jitter: u32,
    /// Damage profile used by combatants without a weapon.
    pub unarmed: UnarmedProfile,
}

/// Basic attack profile for a combatant with an empty weapon slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnarmedProfile {
    pub min_damage: i32,
    pub max_damage: i32,
    pub damage_type: DamageType,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SKILL_CHANCE_PERCENT: u32 = 50;
    pub const DEFAULT_SKILL_JITTER: u32 = 1;
    pub const UNARMED_MIN_DAMAGE: i32 = 1;
    pub const UNARMED_MAX_DAMAGE: i32 = 2;

    pub fn new() -> Self {
        Self {
            skill_chance_percent: Self::DEFAULT_SKILL_CHANCE_PERCENT,
            skill_jitter: Self::DEFAULT_SKILL_JITTER,
            unarmed: UnarmedProfile {
                min_damage: Self::UNARMED_MIN_DAMAGE,
                max_damage: Self::UNARMED_MAX_DAMAGE,
                damage_type: DamageType::Physical,
            },
        }
    }

    pub fn with_skill_chance_percent(mut self, percent: u32) -> Self {
        self.skill_chance_percent = percent.min(100);
        self
    }

    pub fn with_skill_jitter(mut self, jitter: u32) -> Self {
        self.skill_jitter = jitter;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Status effect ledger.
//!
//! Effects are time-boxed stat modifiers and damage-over-time sources. Each
//! one counts down once per turn its holder takes and is dropped when the
//! count reaches zero. Re-applying an effect that is already present adds a
//! second, independent copy: there is no merging or refresh.

/// One active (or template) status effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub name: String,
    /// Turns left. Never zero while attached to a combatant.
    pub remaining: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_delta: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_delta: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed_delta: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_per_round: u32,
    /// Combatant whose action attached this effect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Option<super::CombatantId>,
}

impl StatusEffect {
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            remaining: duration,
            attack_delta: 0,
            defense_delta: 0,
            speed_delta: 0,
            damage_per_round: 0,
            source: None,
        }
    }

    pub fn with_attack_delta(mut self, delta: i32) -> Self {
        self.attack_delta = delta;
        self
    }

    pub fn with_defense_delta(mut self, delta: i32) -> Self {
        self.defense_delta = delta;
        self
    }

    pub fn with_speed_delta(mut self, delta: i32) -> Self {
        self.speed_delta = delta;
        self
    }

    pub fn with_damage_per_round(mut self, damage: u32) -> Self {
        self.damage_per_round = damage;
        self
    }

    /// Copies a template, stamping the combatant that applied it.
    pub fn instantiate(&self, source: super::CombatantId) -> Self {
        Self {
            source: Some(source),
            ..self.clone()
        }
    }
}

/// Effects currently attached to one combatant, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attaches an effect. Zero-duration effects would expire before ever
    /// ticking and are not attached; returns whether the effect was added.
    pub fn add(&mut self, effect: StatusEffect) -> bool {
        if effect.remaining == 0 {
            return false;
        }
        self.effects.push(effect);
        true
    }

    /// Counts every effect down by one turn and returns those that expired,
    /// in application order.
    pub fn tick(&mut self) -> Vec<StatusEffect> {
        let mut expired = Vec::new();
        let mut kept = Vec::with_capacity(self.effects.len());
        for mut effect in self.effects.drain(..) {
            effect.remaining -= 1;
            if effect.remaining == 0 {
                expired.push(effect);
            } else {
                kept.push(effect);
            }
        }
        self.effects = kept;
        expired
    }

    pub fn attack_delta(&self) -> i32 {
        self.effects.iter().map(|e| e.attack_delta).sum()
    }

    pub fn defense_delta(&self) -> i32 {
        self.effects.iter().map(|e| e.defense_delta).sum()
    }

    pub fn speed_delta(&self) -> i32 {
        self.effects.iter().map(|e| e.speed_delta).sum()
    }

    /// Total damage-over-time due at the start of the holder's turn.
    pub fn damage_per_round(&self) -> u32 {
        self.effects
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.damage_per_round))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poison(turns: u32) -> StatusEffect {
        StatusEffect::new("Poison", turns).with_damage_per_round(2)
    }

    #[test]
    fn deltas_sum_across_stacked_copies() {
        let mut ledger = StatusEffects::empty();
        let rage = StatusEffect::new("Rage", 2).with_attack_delta(3).with_defense_delta(-1);
        ledger.add(rage.clone());
        ledger.add(rage);
        ledger.add(poison(1));

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.attack_delta(), 6);
        assert_eq!(ledger.defense_delta(), -2);
        assert_eq!(ledger.damage_per_round(), 2);
    }

    #[test]
    fn effect_expires_after_exactly_its_duration() {
        let mut ledger = StatusEffects::empty();
        ledger.add(poison(3));

        assert!(ledger.tick().is_empty());
        assert!(ledger.tick().is_empty());
        let expired = ledger.tick();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name, "Poison");
        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_duration_is_not_attached() {
        let mut ledger = StatusEffects::empty();
        assert!(!ledger.add(poison(0)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn tick_preserves_order_of_survivors() {
        let mut ledger = StatusEffects::empty();
        ledger.add(StatusEffect::new("A", 2));
        ledger.add(StatusEffect::new("B", 1));
        ledger.add(StatusEffect::new("C", 3));

        let expired = ledger.tick();
        assert_eq!(expired.len(), 1);
        let names: Vec<_> = ledger.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }
}

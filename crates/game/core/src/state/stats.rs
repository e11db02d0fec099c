/// Combat statistics of one combatant.
///
/// `hp` and `mp` move during a battle; everything else is fixed unless
/// shifted by equipment or status effects (see the `effective_*` accessors on
/// [`super::Combatant`]). Invariant: `hp <= max_hp` and `mp <= max_mp`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub max_hp: u32,
    pub hp: u32,
    pub max_mp: u32,
    pub mp: u32,
    pub attack: i32,
    pub defense: i32,
    pub magic_power: i32,
    pub resistance: i32,
    pub speed: i32,
    /// Probability of a critical hit, in `[0, 1]`.
    pub crit_rate: f64,
    /// Damage multiplier on a critical hit, at least `1.0`.
    pub crit_multiplier: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            max_hp: 1,
            hp: 1,
            max_mp: 0,
            mp: 0,
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

impl Stats {
    /// Starts a builder; the built stats begin at full HP and MP.
    pub fn builder() -> StatsBuilder {
        StatsBuilder::default()
    }

    /// Restores up to `amount` HP, clamped to `max_hp`. Returns the HP gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Restores up to `amount` MP, clamped to `max_mp`. Returns the MP gained.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let before = self.mp;
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
        self.mp - before
    }

    /// Deducts `cost` MP if available. Leaves MP untouched otherwise.
    pub fn spend_mp(&mut self, cost: u32) -> bool {
        if self.mp < cost {
            return false;
        }
        self.mp -= cost;
        true
    }

    pub(crate) fn grow_max_hp(&mut self, bonus: u32) {
        self.max_hp = self.max_hp.saturating_add(bonus);
        self.hp = self.hp.saturating_add(bonus);
    }

    /// Reverses [`Self::grow_max_hp`]. Current HP loses the bonus too but
    /// never drops below 1 on a living holder.
    pub(crate) fn shrink_max_hp(&mut self, bonus: u32) {
        self.max_hp = self.max_hp.saturating_sub(bonus);
        if self.hp > 0 {
            self.hp = self.hp.saturating_sub(bonus).max(1);
        }
        self.hp = self.hp.min(self.max_hp);
    }
}

/// Builder for [`Stats`].
#[derive(Clone, Debug, Default)]
pub struct StatsBuilder {
    max_hp: u32,
    max_mp: u32,
    attack: i32,
    defense: i32,
    magic_power: i32,
    resistance: i32,
    speed: i32,
    crit_rate: f64,
    crit_multiplier: Option<f64>,
}

impl StatsBuilder {
    pub fn max_hp(mut self, value: u32) -> Self {
        self.max_hp = value;
        self
    }

    pub fn max_mp(mut self, value: u32) -> Self {
        self.max_mp = value;
        self
    }

    pub fn attack(mut self, value: i32) -> Self {
        self.attack = value;
        self
    }

    pub fn defense(mut self, value: i32) -> Self {
        self.defense = value;
        self
    }

    pub fn magic_power(mut self, value: i32) -> Self {
        self.magic_power = value;
        self
    }

    pub fn resistance(mut self, value: i32) -> Self {
        self.resistance = value;
        self
    }

    pub fn speed(mut self, value: i32) -> Self {
        self.speed = value;
        self
    }

    pub fn crit(mut self, rate: f64, multiplier: f64) -> Self {
        self.crit_rate = rate;
        self.crit_multiplier = Some(multiplier);
        self
    }

    /// Builds stats at full HP/MP, clamping crit parameters into range.
    pub fn build(self) -> Stats {
        let crit_rate = if self.crit_rate.is_nan() {
            0.0
        } else {
            self.crit_rate.clamp(0.0, 1.0)
        };
        let crit_multiplier = self
            .crit_multiplier
            .filter(|m| !m.is_nan())
            .unwrap_or(1.0)
            .max(1.0);

        Stats {
            max_hp: self.max_hp,
            hp: self.max_hp,
            max_mp: self.max_mp,
            mp: self.max_mp,
            attack: self.attack,
            defense: self.defense,
            magic_power: self.magic_power,
            resistance: self.resistance,
            speed: self.speed,
            crit_rate,
            crit_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleric() -> Stats {
        Stats::builder().max_hp(45).max_mp(50).magic_power(6).build()
    }

    #[test]
    fn builder_starts_full() {
        let stats = cleric();
        assert_eq!((stats.hp, stats.mp), (45, 50));
        assert_eq!(stats.crit_multiplier, 1.0);
    }

    #[test]
    fn builder_clamps_crit() {
        let stats = Stats::builder().max_hp(1).crit(3.0, 0.5).build();
        assert_eq!(stats.crit_rate, 1.0);
        assert_eq!(stats.crit_multiplier, 1.0);
    }

    #[test]
    fn heal_clamps_to_max() {
        let mut stats = cleric();
        stats.hp = 10;
        assert_eq!(stats.heal(18), 18);
        assert_eq!(stats.hp, 28);

        stats.hp = 40;
        assert_eq!(stats.heal(18), 5);
        assert_eq!(stats.hp, 45);
    }

    #[test]
    fn spend_mp_requires_enough() {
        let mut stats = cleric();
        stats.mp = 5;
        assert!(!stats.spend_mp(8));
        assert_eq!(stats.mp, 5);
        assert!(stats.spend_mp(5));
        assert_eq!(stats.mp, 0);
    }

    #[test]
    fn shrinking_max_hp_clamps_current() {
        let mut stats = cleric();
        stats.grow_max_hp(5);
        assert_eq!((stats.max_hp, stats.hp), (50, 50));
        stats.shrink_max_hp(5);
        assert_eq!((stats.max_hp, stats.hp), (45, 45));
    }

    #[test]
    fn shrinking_max_hp_takes_back_bonus_hp() {
        let mut stats = cleric();
        stats.hp = 10;
        stats.grow_max_hp(5);
        assert_eq!((stats.max_hp, stats.hp), (50, 15));
        stats.shrink_max_hp(5);
        assert_eq!((stats.max_hp, stats.hp), (45, 10));
    }

    #[test]
    fn shrinking_max_hp_never_kills() {
        let mut stats = cleric();
        stats.grow_max_hp(5);
        stats.hp = 3;
        stats.shrink_max_hp(5);
        assert_eq!(stats.hp, 1);
    }
}

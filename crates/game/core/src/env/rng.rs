//! Deterministic random number generation for combat rolls.
//!
//! # Determinism
//!
//! Given the same battle seed, the same sequence of roll requests yields the
//! same values. Rolls are never skipped conditionally on their own outcome, so
//! a replay with the same seed and the same decisions reproduces a battle
//! event for event.

use std::fmt;
use std::sync::Arc;

/// RNG oracle mapping a seed to a pseudo-random `u32`.
///
/// Implementations must be pure functions of the seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: one LCG step on the 64-bit seed followed by an xorshift and a
/// data-dependent rotation producing 32 bits of output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// What a roll is for. Mixed into the per-roll seed so that rolls of
/// different purposes never share a stream position by accident.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollKind {
    /// Weapon damage within its min/max range.
    WeaponDamage,
    /// Critical hit check.
    Critical,
    /// Skill damage jitter.
    Jitter,
    /// Autopilot: whether to try a skill this turn.
    SkillChance,
    /// Autopilot: which skill to try.
    SkillPick,
}

impl RollKind {
    const fn context(self) -> u32 {
        match self {
            Self::WeaponDamage => 0,
            Self::Critical => 1,
            Self::Jitter => 2,
            Self::SkillChance => 3,
            Self::SkillPick => 4,
        }
    }
}

/// Compute a deterministic per-roll seed.
///
/// * `battle_seed` - seed chosen when the battle was created
/// * `nonce` - roll sequence number (increments on every roll)
/// * `context` - discriminates the purpose of the roll
pub fn compute_seed(battle_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64/FxHash style mixing constants
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}

/// Seeded roll source owned by a battle.
///
/// Cloning a `Dice` forks its stream: both copies continue from the same
/// nonce and yield identical rolls.
#[derive(Clone)]
pub struct Dice {
    oracle: Arc<dyn RngOracle>,
    seed: u64,
    nonce: u64,
}

impl fmt::Debug for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dice")
            .field("seed", &self.seed)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}

impl Dice {
    /// Creates dice backed by [`PcgRng`].
    pub fn new(seed: u64) -> Self {
        Self::with_oracle(seed, PcgRng)
    }

    /// Creates dice backed by a custom oracle.
    pub fn with_oracle(seed: u64, oracle: impl RngOracle + 'static) -> Self {
        Self {
            oracle: Arc::new(oracle),
            seed,
            nonce: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rolls made so far.
    pub fn rolls(&self) -> u64 {
        self.nonce
    }

    fn next(&mut self, kind: RollKind) -> u32 {
        let seed = compute_seed(self.seed, self.nonce, kind.context());
        self.nonce += 1;
        self.oracle.next_u32(seed)
    }

    /// Uniform integer in `[min, max]` inclusive. Returns `min` without
    /// rolling when the range is empty or a single value.
    pub fn range(&mut self, kind: RollKind, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next(kind)) % span;
        (i64::from(min) + offset as i64) as i32
    }

    /// Returns `true` with probability `p`. Always consumes one roll.
    pub fn chance(&mut self, kind: RollKind, p: f64) -> bool {
        let roll = f64::from(self.next(kind)) / 4_294_967_296.0;
        roll < p
    }

    /// Returns `true` with probability `percent / 100`.
    pub fn percent(&mut self, kind: RollKind, percent: u32) -> bool {
        self.chance(kind, f64::from(percent) / 100.0)
    }

    /// Uniform index into a collection of `len` elements.
    pub fn index(&mut self, kind: RollKind, len: usize) -> Option<usize> {
        match len {
            0 => None,
            1 => Some(0),
            _ => Some((u64::from(self.next(kind)) % len as u64) as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = Dice::new(7);
        let mut b = Dice::new(7);
        for _ in 0..100 {
            assert_eq!(
                a.range(RollKind::WeaponDamage, 1, 100),
                b.range(RollKind::WeaponDamage, 1, 100)
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Dice::new(1);
        let mut b = Dice::new(2);
        let rolls_a: Vec<_> = (0..16).map(|_| a.range(RollKind::Jitter, 0, 1_000)).collect();
        let rolls_b: Vec<_> = (0..16).map(|_| b.range(RollKind::Jitter, 0, 1_000)).collect();
        assert_ne!(rolls_a, rolls_b);
    }

    #[test]
    fn range_is_inclusive_and_bounded() {
        let mut dice = Dice::new(99);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1_000 {
            let v = dice.range(RollKind::Jitter, -1, 1);
            assert!((-1..=1).contains(&v));
            seen_min |= v == -1;
            seen_max |= v == 1;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn degenerate_range_does_not_roll() {
        let mut dice = Dice::new(3);
        assert_eq!(dice.range(RollKind::WeaponDamage, 4, 4), 4);
        assert_eq!(dice.range(RollKind::WeaponDamage, 5, 2), 5);
        assert_eq!(dice.rolls(), 0);
    }

    #[test]
    fn chance_extremes() {
        let mut low = Dice::with_oracle(0, Fixed(0));
        assert!(low.chance(RollKind::Critical, 0.01));
        assert!(!low.chance(RollKind::Critical, 0.0));

        let mut high = Dice::with_oracle(0, Fixed(u32::MAX));
        assert!(!high.chance(RollKind::Critical, 0.99));
        assert!(high.chance(RollKind::Critical, 1.0));
        assert_eq!(high.rolls(), 2);
    }

    #[test]
    fn clone_forks_the_stream() {
        let mut dice = Dice::new(11);
        dice.range(RollKind::Jitter, 0, 10);
        let mut fork = dice.clone();
        assert_eq!(
            dice.range(RollKind::WeaponDamage, 0, 1_000),
            fork.range(RollKind::WeaponDamage, 0, 1_000)
        );
    }

    #[test]
    fn index_handles_small_collections() {
        let mut dice = Dice::new(5);
        assert_eq!(dice.index(RollKind::SkillPick, 0), None);
        assert_eq!(dice.index(RollKind::SkillPick, 1), Some(0));
        assert!(dice.index(RollKind::SkillPick, 3).is_some_and(|i| i < 3));
    }
}

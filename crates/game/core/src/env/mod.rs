//! Sources of nondeterminism, injected into the battle.
//!
//! The engine never reaches for a global RNG. Every roll goes through a
//! [`Dice`] owned by the battle, which derives a fresh seed per roll from the
//! battle seed and a running nonce and hands it to an [`RngOracle`].
mod rng;

pub use rng::{Dice, PcgRng, RngOracle, RollKind, compute_seed};

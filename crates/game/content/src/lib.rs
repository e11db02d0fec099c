//! Data-driven battle content and loaders.
//!
//! This crate describes battles as data and turns that data into ready
//! [`battle_core::Battle`]s:
//! - Scenario definitions: two rosters of combatants (data-driven via RON)
//! - Battle tuning (data-driven via TOML)
//!
//! Content is consumed once at setup and never referenced by a running battle.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{CombatantSpec, ScenarioSpec, StatsSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ScenarioLoader};

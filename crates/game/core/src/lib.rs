//! Deterministic turn-based combat resolution.
//!
//! `battle-core` owns the rules: combatant state, damage and mitigation,
//! status effects, speed-ordered turns and the round loop. A battle is a
//! pure function of its rosters, its seed and the actions chosen each turn;
//! front ends drive it through [`engine::Battle`] and render the
//! [`event::RoundLog`] it returns.
//!
//! ```
//! use battle_core::{Battle, Combatant, CombatantId, Stats, Team};
//!
//! let hero = Combatant::new(
//!     CombatantId(1),
//!     "Hero",
//!     Team::Player,
//!     Stats::builder().max_hp(30).attack(5).speed(3).build(),
//! );
//! let slime = Combatant::new(
//!     CombatantId(2),
//!     "Slime",
//!     Team::Enemy,
//!     Stats::builder().max_hp(12).attack(1).speed(1).build(),
//! );
//!
//! let mut battle = Battle::builder().player(hero).enemy(slime).seed(7).build()?;
//! let winner = battle.run_to_completion();
//! assert_eq!(battle.winner(), Some(winner));
//! # Ok::<(), battle_core::BattleError>(())
//! ```
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{Action, ActionError};
pub use ai::{ActionSource, AutoPilot, BattleView};
pub use combat::{AttackRoll, DamageOutcome, DamageType};
pub use config::{BattleConfig, UnarmedProfile};
pub use engine::{Battle, BattleBuilder};
pub use env::{Dice, PcgRng, RngOracle, RollKind};
pub use error::BattleError;
pub use event::{BattleEvent, Participant, RoundLog};
pub use state::{
    Armor, Combatant, CombatantId, EquipSlot, Equipment, Inventory, Item, ItemKind, Skill, Stats,
    StatsBuilder, StatusEffect, StatusEffects, Team, Weapon,
};

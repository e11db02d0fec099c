//! Combatant state owned by a battle.
//!
//! Everything here is plain data plus the local invariants that keep it
//! consistent (HP/MP bounds, armor HP bonus bookkeeping, effect lifetimes).
//! Cross-combatant rules live in [`crate::combat`] and [`crate::engine`].
mod combatant;
mod equipment;
mod item;
mod skill;
mod stats;
mod status;

pub use combatant::{Combatant, CombatantId, Team};
pub use equipment::{Armor, Equipment, EquipSlot, Weapon};
pub use item::{Inventory, Item, ItemKind};
pub use skill::Skill;
pub use stats::{Stats, StatsBuilder};
pub use status::{StatusEffect, StatusEffects};

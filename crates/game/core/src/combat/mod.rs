//! Combat resolution.
//!
//! Pure functions turning an attacker's stats and a few dice rolls into a raw
//! damage number ([`resolve`]), and turning raw damage into HP loss on the
//! receiving end ([`damage`]). Nothing here decides *who* acts or *whom* they
//! hit; that is the engine's job.

pub mod damage;
pub mod resolve;

pub use damage::{DamageOutcome, DamageType, MIN_DAMAGE, mitigate};
pub use resolve::{AttackRoll, roll_basic_attack, roll_skill};

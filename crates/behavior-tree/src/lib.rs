//! Minimal behavior tree for turn-based decision making.
//!
//! A tree is evaluated once per decision: every node finishes during the
//! tick that reaches it, so there is no `Running` state and no delta time.
//! Nodes communicate through a caller-defined blackboard `C`, which is also
//! where randomness lives, keeping evaluation reproducible from a seed.
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: `Success` or `Failure`
//! - Composites: [`Sequence`] (AND), [`Selector`] (OR)
//! - Decorator: [`Inverter`]
//! - Leaves: [`Condition`] (read-only predicate), [`Task`] (mutating step)

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{Condition, Task};
pub use status::Status;

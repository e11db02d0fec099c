//! Core behavior trait.

use crate::Status;

/// A behavior tree node evaluated against a blackboard `C`.
///
/// Nodes may read and write the blackboard (for example to record the
/// decision they settled on). Evaluation must depend only on the blackboard
/// so that identical blackboards yield identical results.
pub trait Behavior<C>: Send + Sync {
    /// Evaluates this node once.
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

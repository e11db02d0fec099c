//! Leaf nodes built from closures.

use crate::{Behavior, Status};

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;
type Step<C> = Box<dyn Fn(&mut C) -> bool + Send + Sync>;

/// Read-only check against the blackboard.
pub struct Condition<C> {
    predicate: Predicate<C>,
}

impl<C> Condition<C> {
    pub fn new(predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        (self.predicate)(ctx).into()
    }
}

/// Step that may mutate the blackboard; `false` means it could not be done.
///
/// A failing task should leave the blackboard as it found it unless the
/// partial write is intended (consuming a random roll, for instance).
pub struct Task<C> {
    step: Step<C>,
}

impl<C> Task<C> {
    pub fn new(step: impl Fn(&mut C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            step: Box::new(step),
        }
    }
}

impl<C> Behavior<C> for Task<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        (self.step)(ctx).into()
    }
}

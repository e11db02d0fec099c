//! Decorator nodes.

use crate::{Behavior, Status};

/// Negates the result of its child.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Wraps `child`.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;

    struct Board {
        hp: u32,
    }

    #[test]
    fn inverter_flips_condition() {
        let alive = || Box::new(Condition::new(|b: &Board| b.hp > 0)) as Box<dyn Behavior<Board>>;
        let dead = Inverter::new(alive());

        assert_eq!(dead.tick(&mut Board { hp: 3 }), Status::Failure);
        assert_eq!(dead.tick(&mut Board { hp: 0 }), Status::Success);
    }
}

use std::cmp::Reverse;

use crate::state::Combatant;

/// Acting order for a round: indices of living combatants, fastest first.
///
/// Ties keep input order (players before enemies, roster order within a
/// side). No randomness is involved.
pub fn turn_order(combatants: &[Combatant]) -> Vec<usize> {
    let mut order: Vec<usize> = combatants
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(index, _)| index)
        .collect();
    order.sort_by_key(|&index| Reverse(combatants[index].effective_speed()));
    order
}

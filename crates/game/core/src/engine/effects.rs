//! Start- and end-of-turn status effect processing.

use crate::combat::DamageType;
use crate::event::{BattleEvent, Participant, RoundLog};
use crate::state::Combatant;

/// Applies the summed damage-over-time of every active effect as one pure
/// hit. May kill the holder.
pub(super) fn start_of_turn(holder: &mut Combatant, log: &mut RoundLog) {
    let dot = holder.effects().damage_per_round();
    if dot == 0 {
        return;
    }

    let raw = i32::try_from(dot).unwrap_or(i32::MAX);
    let outcome = holder.take_damage(raw, DamageType::Pure);
    let target = Participant::from(&*holder);
    log.push(BattleEvent::DamageOverTime {
        target: target.clone(),
        amount: outcome.dealt,
    });
    if outcome.killed {
        log.push(BattleEvent::Died { target });
    }
}

/// Counts every effect down by one and logs those that ran out.
pub(super) fn end_of_turn(holder: &mut Combatant, log: &mut RoundLog) {
    for expired in holder.tick_effects() {
        log.push(BattleEvent::EffectEnded {
            target: Participant::from(&*holder),
            effect: expired.name,
        });
    }
}

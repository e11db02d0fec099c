//! One battle from spawn to verdict.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use battle_core::{Battle, RoundLog, Team};
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::Presenter;

/// Rounds buffered between the engine task and the presenter.
const ROUND_BUFFER: usize = 4;

/// Runs `battle` on a blocking thread, sending each round's log as it is
/// resolved. The task stops early if the receiver is dropped and yields the
/// winner, if the battle was decided.
pub fn spawn(mut battle: Battle) -> (mpsc::Receiver<RoundLog>, JoinHandle<Option<Team>>) {
    let (tx, rx) = mpsc::channel(ROUND_BUFFER);
    let handle = tokio::task::spawn_blocking(move || {
        while !battle.is_over() {
            let log = battle.run_round();
            if tx.blocking_send(log).is_err() {
                tracing::warn!(round = battle.round(), "presenter hung up, abandoning battle");
                break;
            }
        }
        battle.winner()
    });
    (rx, handle)
}

/// Plays `battle` to the end, streaming its log through `presenter`.
pub async fn play<W>(battle: Battle, presenter: &mut Presenter<W>) -> Result<Option<Team>>
where
    W: AsyncWrite + Unpin,
{
    tracing::info!(seed = battle.dice().seed(), "battle starting");
    let (mut rounds, engine) = spawn(battle);

    let lines = presenter
        .stream(&mut rounds)
        .await
        .context("Failed to write battle log")?;
    let winner = engine.await.context("Battle task failed")?;

    tracing::info!(lines, ?winner, "battle over");
    Ok(winner)
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

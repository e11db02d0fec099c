//! Paced rendering of battle logs.

use std::io;
use std::time::Duration;

use battle_core::RoundLog;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Writes round logs line by line, pausing after each line.
pub struct Presenter<W> {
    out: W,
    delay: Duration,
}

impl<W: AsyncWrite + Unpin> Presenter<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    /// Drains `rounds` until the sender hangs up; returns the number of
    /// lines written.
    pub async fn stream(&mut self, rounds: &mut mpsc::Receiver<RoundLog>) -> io::Result<usize> {
        let mut written = 0;
        while let Some(log) = rounds.recv().await {
            tracing::debug!(round = log.round, events = log.len(), "presenting round");
            for line in log.lines() {
                self.line(&line).await?;
                written += 1;
                self.pause().await;
            }
        }
        Ok(written)
    }

    /// Writes one line immediately, without pacing.
    pub async fn line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    /// Writes a prompt without a trailing newline.
    pub async fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

//! Diagnostic logging to a per-session file.
//!
//! Battle lines go to stdout; everything emitted through `tracing` lands in
//! `<log dir>/<session id>/skirmish.log` so it never interleaves with them.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::SkirmishConfig;

const LOG_FILE: &str = "skirmish.log";

/// Installs the global subscriber. Keep the returned guard alive for the whole
/// run; dropping it flushes and closes the file writer.
pub fn setup_logging(config: &SkirmishConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    let session_id = config
        .session_id
        .clone()
        .unwrap_or_else(|| format!("session_{}", unix_secs()));

    let session_log_dir = session_dir(&log_dir, &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Platform cache directory for logs, e.g. `~/.cache/skirmish/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "skirmish")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("skirmish"))
        .join("logs")
}

fn session_dir(log_dir: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = log_dir.join(session_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

//! File-based tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a daily-rolling file
//! under ${MINGLE_HOME}/logs/ through a non-blocking writer. The worker
//! guard is held in a process-wide OnceLock so the writer flushes on exit.

use std::fs;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `info` for mingle crates. Safe to call
/// once per process; a second call returns an error from `try_init`.
pub fn init() -> Result<()> {
    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "mingle.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mingle_core=debug,mingle_tui=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

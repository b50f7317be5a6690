//! Full-screen TUI implementation for Mingle.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use mingle_core::config::Config;
pub use runtime::MingleRuntime;

/// Runs the interactive app.
pub async fn run(config: &Config) -> Result<()> {
    // The app is a full-screen TUI; there is no non-interactive mode
    if !stderr().is_terminal() {
        anyhow::bail!("Mingle requires a terminal.");
    }

    let mut runtime = MingleRuntime::new(config.clone())?;
    runtime.run()?;

    Ok(())
}

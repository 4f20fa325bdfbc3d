//! Terminal dash runner (default binary).
//!
//! Sets up logging and the terminal, then hands control to the message
//! pump in `runtime`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tui_dash::core::World;
use tui_dash::runtime;
use tui_dash::term::TerminalRenderer;

fn main() -> Result<()> {
    init_logging();

    // Queried once, before raw mode; without dimensions there is no grid.
    let (width, height) = crossterm::terminal::size().context("failed to get terminal size")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = runtime::run(World::new(width, height), &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a file-backed subscriber when `TUI_DASH_LOG` names a path.
///
/// Raw mode owns the screen, so nothing may log to stdout or stderr; with
/// the variable unset the subscriber is simply not installed.
fn init_logging() {
    let path = match std::env::var("TUI_DASH_LOG") {
        Ok(path) => path,
        Err(_) => return,
    };
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(_) => return,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

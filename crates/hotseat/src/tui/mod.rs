//! Terminal UI: the presentation layer over the engine.
//!
//! Rendering is stateless ([`ui::draw`]); all state lives in [`App`], which
//! forwards intents to the engine one key press at a time.

mod app;
mod input;
mod ui;

pub use app::{App, Control};

use crate::config::HotseatConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

/// Runs the interactive game until the players quit.
pub fn run(config: &HotseatConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting hotseat TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    let res = event_loop(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Hotseat TUI closed");
    res
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Restoration runs on every exit from [`run`], including a failed
/// terminal construction or a panic in the event loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the screen switch so a failure there still
        // leaves raw mode.
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to leave raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to restore the screen");
        }
    }
}

#[instrument(skip_all)]
fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}

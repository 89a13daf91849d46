//! Raw-mode alternate screen owned for the lifetime of the arena UI.
use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Full-screen terminal session.
///
/// Entering switches to raw mode and the alternate screen; dropping the
/// session always switches back, including on early `?` returns.
pub struct TerminalSession {
    terminal: Tui,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;

        // Raw mode is on; undo it if the rest fails.
        let terminal = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
            .map_err(anyhow::Error::from)
            .and_then(|()| Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?));

        match terminal {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                leave();
                Err(e.context("entering alternate screen"))
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        leave();
    }
}

fn leave() {
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        tracing::warn!("Failed to leave alternate screen: {}", e);
    }
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", e);
    }
}

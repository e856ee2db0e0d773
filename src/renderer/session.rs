//! Terminal setup and teardown.
//!
//! Handles entering/exiting raw mode and the alternate screen. On Windows,
//! crossterm turns on virtual-terminal processing the first time it emits a
//! command, which covers the one-time escape-sequence enablement.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

/// RAII guard for an interactive terminal session.
///
/// Restores the terminal on drop, including on early returns via `?`.
pub struct TerminalSession {
    is_raw: bool,
    is_fullscreen: bool,
}

impl TerminalSession {
    /// Enter raw mode on the alternate screen.
    pub fn enter_fullscreen() -> io::Result<Self> {
        let mut session = Self::enter_raw()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        session.is_fullscreen = true;
        Ok(session)
    }

    /// Enter raw mode on the normal screen buffer.
    pub fn enter_inline() -> io::Result<Self> {
        Self::enter_raw()
    }

    fn enter_raw() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self {
            is_raw: true,
            is_fullscreen: false,
        })
    }

    /// Hide or show the caret.
    pub fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(io::stdout(), Show)
        } else {
            execute!(io::stdout(), Hide)
        }
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.is_fullscreen {
            execute!(stdout, ResetColor, Show, LeaveAlternateScreen)?;
            self.is_fullscreen = false;
        } else {
            execute!(stdout, ResetColor, Show)?;
        }
        stdout.flush()?;

        if self.is_raw {
            terminal::disable_raw_mode()?;
            self.is_raw = false;
            tracing::debug!("raw mode disabled");
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

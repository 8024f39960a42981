use std::io;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

pub mod check;
pub mod run;

/// Puts the terminal into the full-screen mode the interactive client
/// needs and restores it on drop.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Acquire the terminal. With `live == false` (tests) this is a no-op.
    pub fn acquire(live: bool) -> Result<Self> {
        if !live {
            return Ok(Self { active: false });
        }
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            EnableFocusChange,
        )
        .context("failed to set up terminal")?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            restore_terminal();
        }
    }
}

/// Leave full-screen mode. Safe to call when it was never entered.
pub fn restore_terminal() {
    execute!(
        io::stdout(),
        DisableFocusChange,
        DisableBracketedPaste,
        LeaveAlternateScreen,
    )
    .ok();
    terminal::disable_raw_mode().ok();
}

use std::io::{self, Write};

use crate::effects::View;
use crate::state::{AppState, ControlState};

/// Line-oriented view for non-interactive use: one line per control state
/// change, nothing for the init screen.
pub struct StatusPrinter<W: Write = io::Stdout> {
    out: W,
    quiet: bool,
    last: Option<ControlState>,
}

impl<W: Write> StatusPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            quiet: false,
            last: None,
        }
    }

    /// Track state without printing anything.
    pub fn quiet(out: W) -> Self {
        Self {
            quiet: true,
            ..Self::new(out)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for StatusPrinter<W> {
    fn render(&mut self, state: &AppState) -> io::Result<()> {
        if self.last == Some(state.control_state) {
            return Ok(());
        }
        self.last = Some(state.control_state);
        if self.quiet {
            return Ok(());
        }
        match state.control_state {
            ControlState::Init => return Ok(()),
            ControlState::CheckingGrammar => writeln!(self.out, "Checking grammar...")?,
            ControlState::FileAvailableForDownload => {
                writeln!(self.out, "{}", state.download_url.as_deref().unwrap_or_default())?;
            }
            ControlState::RequestFailed => writeln!(self.out, "Server failed!")?,
        }
        self.out.flush()
    }
}

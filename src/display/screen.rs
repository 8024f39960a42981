//! Pure description of what each control state shows.

use crate::state::{AppState, ControlState};

pub const TITLE: &str = "paperfile";
pub const PATH_PROMPT: &str = "Path: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Plain,
    Dim,
    DropZone,
    DropZoneActive,
    Loading,
    Success,
    Link,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Plain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Line>,
    /// Whether the path input line is shown below the lines.
    pub accepts_path: bool,
}

impl Screen {
    /// Lines without styling, joined by newlines.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build the screen for `state`.
pub fn screen(state: &AppState) -> Screen {
    let mut lines = vec![Line::new(TITLE, LineStyle::Title), Line::blank()];
    let accepts_path = state.control_state == ControlState::Init;

    match state.control_state {
        ControlState::Init => {
            if state.is_file_dragged_over {
                lines.push(Line::new(
                    ">> Drop Word file here <<",
                    LineStyle::DropZoneActive,
                ));
            } else {
                lines.push(Line::new("Drop Word file here", LineStyle::DropZone));
            }
            lines.push(Line::new("or", LineStyle::Dim));
            lines.push(Line::new(
                "Type the path of a Word file and press Enter",
                LineStyle::Plain,
            ));
            lines.push(Line::blank());
            lines.push(Line::new(
                "Enter check · Esc clear · Ctrl+C quit",
                LineStyle::Dim,
            ));
        }
        ControlState::CheckingGrammar => {
            lines.push(Line::new("Checking grammar...", LineStyle::Loading));
            lines.push(Line::blank());
            lines.push(Line::new("Ctrl+C quit", LineStyle::Dim));
        }
        ControlState::FileAvailableForDownload => {
            lines.push(Line::new("Download corrected file:", LineStyle::Success));
            lines.push(Line::new(
                state.download_url.clone().unwrap_or_default(),
                LineStyle::Link,
            ));
            lines.push(Line::blank());
            lines.push(Line::new("r restart · q quit", LineStyle::Dim));
        }
        ControlState::RequestFailed => {
            lines.push(Line::new("Server failed!", LineStyle::Error));
            lines.push(Line::blank());
            lines.push(Line::new("r restart · q quit", LineStyle::Dim));
        }
    }

    Screen {
        lines,
        accepts_path,
    }
}

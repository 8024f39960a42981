use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{ContentStyle, Print};
use crossterm::{cursor, terminal};
use unicode_width::UnicodeWidthChar;

use super::input::PathInput;
use super::screen::{self, LineStyle, PATH_PROMPT, Screen};
use super::theme;
use crate::effects::View;
use crate::state::{AppState, ControlState};

/// Paints whole screens onto a terminal writer.
pub struct Renderer<W: Write> {
    /// Fixed width override; `None` queries the terminal.
    width: Option<usize>,
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            width: None,
            out: writer,
        }
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = Some(width);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the terminal and draw `screen`, followed by the path prompt
    /// when `input` is given. The cursor is left at the end of the prompt.
    pub fn paint(&mut self, screen: &Screen, input: Option<&str>) -> io::Result<()> {
        let width = self.width.unwrap_or_else(super::term_width);
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        for line in &screen.lines {
            // Links stay whole so they can still be copied.
            let text = if line.style == LineStyle::Link {
                line.text.clone()
            } else {
                truncate_to_width(&line.text, width)
            };
            queue!(self.out, Print(style_for(line.style).apply(text)), Print("\r\n"))?;
        }
        if let Some(input) = input {
            self.queue_prompt(input)?;
        }
        self.out.flush()
    }

    /// Redraw only the prompt line after the buffer was edited.
    pub fn redraw_prompt(&mut self, input: &str) -> io::Result<()> {
        queue!(
            self.out,
            Print("\r"),
            terminal::Clear(terminal::ClearType::CurrentLine),
        )?;
        self.queue_prompt(input)?;
        self.out.flush()
    }

    fn queue_prompt(&mut self, input: &str) -> io::Result<()> {
        queue!(
            self.out,
            Print(theme::prompt_style().apply(PATH_PROMPT)),
            Print(input),
        )
    }
}

fn style_for(style: LineStyle) -> ContentStyle {
    match style {
        LineStyle::Title => theme::title(),
        LineStyle::Plain => theme::plain(),
        LineStyle::Dim => theme::dim(),
        LineStyle::DropZone => theme::drop_zone(),
        LineStyle::DropZoneActive => theme::drop_zone_active(),
        LineStyle::Loading => theme::loading(),
        LineStyle::Success => theme::success(),
        LineStyle::Link => theme::link(),
        LineStyle::Error => theme::error(),
    }
}

/// Full-screen terminal view: renderer plus the path input it echoes.
pub struct TerminalView<W: Write = io::Stdout> {
    renderer: Renderer<W>,
    input: PathInput,
}

impl<W: Write> TerminalView<W> {
    pub fn new(renderer: Renderer<W>) -> Self {
        Self {
            renderer,
            input: PathInput::new(),
        }
    }

    pub fn input_mut(&mut self) -> &mut PathInput {
        &mut self.input
    }

    pub fn redraw_prompt(&mut self) -> io::Result<()> {
        self.renderer.redraw_prompt(self.input.buffer())
    }

    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render(&mut self, state: &AppState) -> io::Result<()> {
        if state.control_state != ControlState::Init {
            self.input.clear();
        }
        let screen = screen::screen(state);
        let input = screen.accepts_path.then(|| self.input.buffer());
        self.renderer.paint(&screen, input)
    }
}

/// Truncate a string to fit within `max_width` display columns, appending `...` if truncated.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let ellipsis_width = 3;
    let mut width = 0;
    // Latest byte position that still leaves room for "..."
    let mut cut_pos = 0;
    let mut result = String::new();
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            if max_width >= ellipsis_width {
                result.truncate(cut_pos);
                result.push_str("...");
            } else {
                result.clear();
            }
            return result;
        }
        result.push(ch);
        width += ch_width;
        if width <= max_width.saturating_sub(ellipsis_width) {
            cut_pos = result.len();
        }
    }
    result
}

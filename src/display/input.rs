use std::path::PathBuf;

use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use url::Url;

use crate::event::{DocumentFile, Event};
use crate::state::ControlState;

/// Result of processing a terminal event.
#[derive(Debug)]
pub enum InputAction {
    /// Nothing to do.
    None,
    /// The path buffer changed; the prompt line needs redrawing.
    Edited,
    /// Feed this event to the dispatcher.
    Dispatch(Event),
    /// User pressed Ctrl-C / Ctrl-D, or `q` on a result screen.
    Quit,
}

/// Line editor for the path prompt, plus the key map for every screen.
#[derive(Debug, Default)]
pub struct PathInput {
    buffer: String,
}

impl PathInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Translate a terminal event into an action for the current screen.
    ///
    /// Drops, focus changes and path editing only apply on the init screen.
    pub fn handle_event(&mut self, event: &TermEvent, control_state: ControlState) -> InputAction {
        let on_init = control_state == ControlState::Init;
        match event {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                self.handle_key(key, control_state)
            }
            TermEvent::Paste(text) if on_init => match parse_path(text) {
                Some(path) => {
                    self.clear();
                    InputAction::Dispatch(Event::DroppedFileInDropZone(DocumentFile::new(path)))
                }
                None => InputAction::None,
            },
            TermEvent::FocusGained if on_init => InputAction::Dispatch(Event::EnteredDropZone),
            TermEvent::FocusLost if on_init => InputAction::Dispatch(Event::LeftDropZone),
            _ => InputAction::None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, control_state: ControlState) -> InputAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'd') => InputAction::Quit,
                _ => InputAction::None,
            };
        }

        match control_state {
            ControlState::Init => self.edit(key),
            ControlState::FileAvailableForDownload | ControlState::RequestFailed => {
                match key.code {
                    KeyCode::Char('r') => InputAction::Dispatch(Event::ClickedRestart),
                    KeyCode::Char('q') => InputAction::Quit,
                    _ => InputAction::None,
                }
            }
            ControlState::CheckingGrammar => match key.code {
                KeyCode::Char('q') => InputAction::Quit,
                _ => InputAction::None,
            },
        }
    }

    fn edit(&mut self, key: &KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Char(c) => {
                self.buffer.push(c);
                InputAction::Edited
            }
            KeyCode::Backspace => {
                if self.buffer.pop().is_some() {
                    InputAction::Edited
                } else {
                    InputAction::None
                }
            }
            KeyCode::Esc => {
                if self.buffer.is_empty() {
                    return InputAction::None;
                }
                self.clear();
                InputAction::Edited
            }
            KeyCode::Enter => {
                let Some(path) = parse_typed_path(&self.buffer) else {
                    return InputAction::None;
                };
                self.clear();
                InputAction::Dispatch(Event::FileSelected(DocumentFile::new(path)))
            }
            _ => InputAction::None,
        }
    }
}

/// Turn pasted text into a path.
///
/// Terminals paste dropped files in several shapes: quoted, shell-escaped,
/// or as `file://` urls. Only the first file is taken when several are
/// dropped at once. A leading `~/` expands to `$HOME`.
pub fn parse_path(text: &str) -> Option<PathBuf> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;

    let raw = match line.chars().next() {
        Some(quote @ ('\'' | '"')) => {
            let rest = &line[1..];
            match rest.find(quote) {
                Some(end) => rest[..end].to_string(),
                None => rest.to_string(),
            }
        }
        _ if cfg!(windows) => line.to_string(),
        _ => unescape_first_word(line),
    };
    to_path(&raw)
}

/// Turn a typed path into a path. Inner spaces are kept as typed; only
/// surrounding whitespace and one pair of matching quotes are removed.
pub fn parse_typed_path(text: &str) -> Option<PathBuf> {
    let line = text.trim();
    let raw = ['\'', '"']
        .into_iter()
        .find_map(|quote| line.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(line);
    to_path(raw)
}

fn to_path(raw: &str) -> Option<PathBuf> {
    if raw.starts_with("file://") {
        return Url::parse(raw).ok()?.to_file_path().ok();
    }
    if raw.is_empty() {
        return None;
    }
    Some(expand_home(raw))
}

/// Undo shell backslash escaping, stopping at the first unescaped space.
fn unescape_first_word(line: &str) -> String {
    let mut out = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            c if c.is_whitespace() => break,
            c => out.push(c),
        }
    }
    out
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(raw)
}

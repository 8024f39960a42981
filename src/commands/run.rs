use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::Event as TermEvent;

use crate::dispatcher::Dispatcher;
use crate::display::input::InputAction;
use crate::display::renderer::{Renderer, TerminalView};
use crate::effects::{EventSender, View};
use crate::event::{DocumentFile, Event};
use crate::io::{Io, IoEvent};
use crate::state::AppState;
use crate::upload::Uploader;

use super::RawModeGuard;

pub struct RunConfig {
    /// Document to submit as soon as the app starts.
    pub file: Option<PathBuf>,
    /// Whether to take over the real terminal (raw mode, alternate screen).
    pub live: bool,
    /// Fixed width for rendering; `None` queries the terminal.
    pub term_width: Option<usize>,
}

/// Run the interactive client until the user quits. Returns the final state.
pub async fn run<W: Write>(
    config: RunConfig,
    uploader: Arc<dyn Uploader>,
    io: &mut Io,
    events: EventSender,
    writer: W,
) -> Result<AppState> {
    let _raw = RawModeGuard::acquire(config.live)?;
    let mut renderer = Renderer::with_writer(writer);
    if let Some(width) = config.term_width {
        renderer.set_width(width);
    }
    let mut dispatcher = Dispatcher::new(TerminalView::new(renderer), uploader, events);

    dispatcher.dispatch(Event::AppStarted(AppState::initial()))?;
    if let Some(path) = config.file {
        dispatcher.dispatch(Event::FileSelected(DocumentFile::new(path)))?;
    }

    event_loop(&mut dispatcher, io).await?;
    Ok(dispatcher.state().clone())
}

/// Drain inputs one at a time: completed uploads go straight to the
/// dispatcher, terminal input goes through the view's key map first.
async fn event_loop<W: Write>(
    dispatcher: &mut Dispatcher<TerminalView<W>>,
    io: &mut Io,
) -> Result<()> {
    while let Some(io_event) = io.next_event().await {
        match io_event {
            IoEvent::App(event) => dispatcher.dispatch(event)?,
            IoEvent::Terminal(TermEvent::Resize(..)) => {
                let state = dispatcher.state().clone();
                dispatcher.view_mut().render(&state)?;
            }
            IoEvent::Terminal(term_event) => {
                let control_state = dispatcher.state().control_state;
                let action = dispatcher
                    .view_mut()
                    .input_mut()
                    .handle_event(&term_event, control_state);
                match action {
                    InputAction::None => {}
                    InputAction::Edited => dispatcher.view_mut().redraw_prompt()?,
                    InputAction::Dispatch(event) => dispatcher.dispatch(event)?,
                    InputAction::Quit => break,
                }
            }
        }
    }
    Ok(())
}

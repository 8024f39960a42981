use crate::event::{DocumentFile, Event};
use crate::state::{AppState, ControlState, StateUpdates};

/// A side effect requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Paint the view from the updated state.
    Render,
    /// Start uploading the document.
    UploadFile(DocumentFile),
}

/// What an event does: how the state changes and which effects run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub updates: StateUpdates,
    pub commands: Vec<Command>,
}

impl Transition {
    fn render(updates: StateUpdates) -> Self {
        Self {
            updates,
            commands: vec![Command::Render],
        }
    }

    /// The upload is issued before the render so the screen already shows
    /// the checking state while the request runs.
    fn upload_then_render(updates: StateUpdates, file: DocumentFile) -> Self {
        Self {
            updates,
            commands: vec![Command::UploadFile(file), Command::Render],
        }
    }
}

/// Compute the transition for `event` in `state`.
///
/// Returns `None` when the event has no meaning in the current control
/// state (e.g. a late `RequestSucceeded` after a restart). The caller
/// decides what to do with those.
pub fn controller(event: Event, state: &AppState) -> Option<Transition> {
    use ControlState::{CheckingGrammar, Init};

    match (event, state.control_state) {
        (Event::AppStarted(initial), _) => Some(Transition::render(initial.into())),
        (Event::ClickedRestart, _) => Some(Transition::render(AppState::initial().into())),

        (Event::EnteredDropZone, Init) => Some(Transition::render(
            StateUpdates::default().file_dragged_over(true),
        )),
        (Event::LeftDropZone, Init) => Some(Transition::render(
            StateUpdates::default().file_dragged_over(false),
        )),
        (Event::DroppedFileInDropZone(file), Init) => Some(Transition::upload_then_render(
            StateUpdates::default()
                .file_dragged_over(false)
                .control_state(CheckingGrammar),
            file,
        )),
        (Event::FileSelected(file), Init) => Some(Transition::upload_then_render(
            StateUpdates::default()
                .download_url(None)
                .control_state(CheckingGrammar),
            file,
        )),

        // The error detail is not shown; the view only says the server failed.
        (Event::RequestErrored(_), CheckingGrammar) => Some(Transition::render(
            StateUpdates::default()
                .download_url(None)
                .control_state(ControlState::RequestFailed),
        )),
        (Event::RequestSucceeded(url), CheckingGrammar) => Some(Transition::render(
            StateUpdates::default()
                .download_url(Some(url))
                .control_state(ControlState::FileAvailableForDownload),
        )),

        (
            Event::EnteredDropZone
            | Event::LeftDropZone
            | Event::DroppedFileInDropZone(_)
            | Event::FileSelected(_)
            | Event::RequestErrored(_)
            | Event::RequestSucceeded(_),
            _,
        ) => None,
    }
}

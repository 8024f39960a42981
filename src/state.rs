use serde::Serialize;

/// Which screen the application is on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    /// Waiting for a document to be dropped or selected.
    #[default]
    Init,
    /// Upload in flight; the service is checking the document.
    CheckingGrammar,
    /// The service returned a link to the corrected document.
    FileAvailableForDownload,
    /// The upload or the service failed.
    RequestFailed,
}

/// Full application state. Owned by the dispatcher and replaced wholesale
/// on every update.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub control_state: ControlState,
    pub is_file_dragged_over: bool,
    pub download_url: Option<String>,
}

impl AppState {
    /// State used at startup and after a restart.
    pub fn initial() -> Self {
        Self {
            control_state: ControlState::Init,
            is_file_dragged_over: false,
            download_url: None,
        }
    }
}

/// Partial state. `None` fields leave the current value untouched.
///
/// `download_url` is doubly optional: `Some(None)` clears the url,
/// `None` keeps whatever was there.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StateUpdates {
    pub control_state: Option<ControlState>,
    pub is_file_dragged_over: Option<bool>,
    pub download_url: Option<Option<String>>,
}

impl StateUpdates {
    pub fn control_state(mut self, control_state: ControlState) -> Self {
        self.control_state = Some(control_state);
        self
    }

    pub fn file_dragged_over(mut self, dragged_over: bool) -> Self {
        self.is_file_dragged_over = Some(dragged_over);
        self
    }

    pub fn download_url(mut self, url: Option<String>) -> Self {
        self.download_url = Some(url);
        self
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.control_state.is_none()
            && self.is_file_dragged_over.is_none()
            && self.download_url.is_none()
    }
}

/// A full state converts into updates that replace every field.
impl From<AppState> for StateUpdates {
    fn from(state: AppState) -> Self {
        Self {
            control_state: Some(state.control_state),
            is_file_dragged_over: Some(state.is_file_dragged_over),
            download_url: Some(state.download_url),
        }
    }
}

/// Merge `updates` over `state`, producing a new state. Fields present in
/// `updates` win.
pub fn update_state(state: &AppState, updates: &StateUpdates) -> AppState {
    AppState {
        control_state: updates.control_state.unwrap_or(state.control_state),
        is_file_dragged_over: updates
            .is_file_dragged_over
            .unwrap_or(state.is_file_dragged_over),
        download_url: match &updates.download_url {
            Some(url) => url.clone(),
            None => state.download_url.clone(),
        },
    }
}

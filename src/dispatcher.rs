use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::controller::{Command, Transition, controller};
use crate::effects::{self, EventSender, View};
use crate::event::Event;
use crate::state::{AppState, update_state};
use crate::upload::Uploader;

/// Owns the application state and runs every event through
/// controller → state update → commands.
///
/// Effects that complete later push their events onto `events`; the loop
/// that owns the receiver feeds them back through [`Dispatcher::dispatch`]
/// one at a time.
pub struct Dispatcher<V: View> {
    state: AppState,
    view: V,
    uploader: Arc<dyn Uploader>,
    events: EventSender,
}

impl<V: View> Dispatcher<V> {
    pub fn new(view: V, uploader: Arc<dyn Uploader>, events: EventSender) -> Self {
        Self {
            state: AppState::initial(),
            view,
            uploader,
            events,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Process one event to completion.
    ///
    /// Events that mean nothing in the current control state leave the
    /// state untouched and run no commands.
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        let name = event.name();
        let Some(Transition { updates, commands }) = controller(event, &self.state) else {
            warn!(event = name, state = ?self.state.control_state, "ignoring event");
            return Ok(());
        };
        self.state = update_state(&self.state, &updates);
        debug!(event = name, state = ?self.state.control_state, "dispatched");
        self.handle_commands(commands)
    }

    fn handle_commands(&mut self, commands: Vec<Command>) -> Result<()> {
        for command in commands {
            match command {
                Command::Render => self.view.render(&self.state).context("failed to render")?,
                Command::UploadFile(file) => {
                    effects::spawn_upload(self.uploader.as_ref(), file, self.events.clone());
                }
            }
        }
        Ok(())
    }
}

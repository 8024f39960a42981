use tokio::sync::mpsc;

use crate::event::Event;

/// An input to the main loop: either completed async work or terminal input.
#[derive(Debug)]
pub enum IoEvent {
    App(Event),
    Terminal(crossterm::event::Event),
}

/// Merges the dispatcher's event queue with the terminal event stream.
pub struct Io {
    event_rx: mpsc::UnboundedReceiver<Event>,
    term_rx: mpsc::UnboundedReceiver<crossterm::event::Event>,
}

impl Io {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<Event>,
        term_rx: mpsc::UnboundedReceiver<crossterm::event::Event>,
    ) -> Self {
        Self { event_rx, term_rx }
    }

    /// Wait for the next input. Returns `None` once terminal input is closed.
    pub async fn next_event(&mut self) -> Option<IoEvent> {
        tokio::select! {
            Some(event) = self.event_rx.recv() => Some(IoEvent::App(event)),
            event = self.term_rx.recv() => event.map(IoEvent::Terminal),
        }
    }
}

use std::io;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::event::{DocumentFile, Event};
use crate::state::AppState;
use crate::upload::Uploader;

/// Producer side of the dispatcher's event queue.
pub type EventSender = mpsc::UnboundedSender<Event>;

/// Paints the application state.
///
/// Implementations never see the event queue, so a render cannot feed
/// events back into the dispatcher.
pub trait View {
    fn render(&mut self, state: &AppState) -> io::Result<()>;
}

/// Start uploading `file` in the background.
///
/// Exactly one of `RequestSucceeded` / `RequestErrored` is sent on
/// `events` when the upload settles.
pub fn spawn_upload(uploader: &dyn Uploader, file: DocumentFile, events: EventSender) -> JoinHandle<()> {
    info!(path = %file.path().display(), "uploading document");
    let upload = uploader.upload(file);
    tokio::spawn(async move {
        let event = match upload.await {
            Ok(url) => {
                info!(%url, "upload succeeded");
                Event::RequestSucceeded(url)
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                Event::RequestErrored(err)
            }
        };
        // Receiver gone means the app is already shutting down.
        let _ = events.send(event);
    })
}

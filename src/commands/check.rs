use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, ensure};
use tokio::sync::mpsc;

use crate::dispatcher::Dispatcher;
use crate::display::status::StatusPrinter;
use crate::event::{DocumentFile, Event};
use crate::state::{AppState, ControlState};
use crate::upload::Uploader;

pub struct CheckConfig {
    pub file: PathBuf,
    /// Print the final state as JSON instead of progress lines.
    pub json: bool,
}

/// Check one document without the full-screen UI.
///
/// Runs the same dispatcher as the interactive client and stops once the
/// upload has settled. Returns the final state.
pub async fn check<W: Write>(
    config: CheckConfig,
    uploader: Arc<dyn Uploader>,
    mut writer: W,
) -> Result<AppState> {
    ensure!(
        config.file.is_file(),
        "{} is not a readable file",
        config.file.display()
    );

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let view = if config.json {
        StatusPrinter::quiet(&mut writer)
    } else {
        StatusPrinter::new(&mut writer)
    };
    let mut dispatcher = Dispatcher::new(view, uploader, event_tx);

    dispatcher.dispatch(Event::AppStarted(AppState::initial()))?;
    dispatcher.dispatch(Event::FileSelected(DocumentFile::new(config.file)))?;
    while dispatcher.state().control_state == ControlState::CheckingGrammar {
        let Some(event) = event_rx.recv().await else {
            break;
        };
        dispatcher.dispatch(event)?;
    }

    let state = dispatcher.state().clone();
    drop(dispatcher);
    if config.json {
        serde_json::to_writer_pretty(&mut writer, &state)?;
        writeln!(writer)?;
    }
    Ok(state)
}

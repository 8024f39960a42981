mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use paperfile::commands::{self, check::CheckConfig, run::RunConfig};
use paperfile::config::{self, CONFIG_PATH};
use paperfile::effects::EventSender;
use paperfile::io::Io;
use paperfile::logging::{self, LogTarget};
use paperfile::state::ControlState;
use paperfile::upload::{UploadClient, Uploader};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => {
            ensure!(path.exists(), "config file {} does not exist", path.display());
            path
        }
        None => Path::new(CONFIG_PATH).to_path_buf(),
    };
    let mut config = config::load(&config_path)?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    let uploader: Arc<dyn Uploader> =
        Arc::new(UploadClient::new(&config).context("failed to set up upload client")?);

    match cli.command {
        Some(Command::Check { file, json }) => {
            logging::init(cli.log_file.map_or(LogTarget::Stderr, LogTarget::File))?;
            let state =
                commands::check::check(CheckConfig { file, json }, uploader, std::io::stdout())
                    .await?;
            if state.control_state != ControlState::FileAvailableForDownload {
                bail!("grammar check failed");
            }
        }
        None => {
            logging::init(cli.log_file.map_or(LogTarget::Off, LogTarget::File))?;
            let (mut io, events) = create_live_io();
            commands::run::run(
                RunConfig {
                    file: cli.file,
                    live: true,
                    term_width: None,
                },
                uploader,
                &mut io,
                events,
                std::io::stdout(),
            )
            .await?;
        }
    }

    Ok(())
}

/// Install a panic hook that restores terminal state before printing the panic.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        commands::restore_terminal();
        default_hook(info);
    }));
}

/// Create a live `Io` and the sender effects use to feed events back.
///
/// Spawns a background task that reads crossterm events and forwards them
/// to the terminal event channel.
fn create_live_io() -> (Io, EventSender) {
    use crossterm::event::EventStream;
    use futures::StreamExt;
    use tokio::sync::mpsc;

    let (term_tx, term_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut stream = EventStream::new();
        while let Some(Ok(event)) = stream.next().await {
            if term_tx.send(event).is_err() {
                return;
            }
        }
    });

    (Io::new(event_rx, term_rx), event_tx)
}

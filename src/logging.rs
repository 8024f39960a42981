use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// No subscriber at all. The full-screen view owns stdout and stderr.
    Off,
    /// Standard error, warnings and up unless `RUST_LOG` says otherwise.
    Stderr,
    /// Append to a file, info and up unless `RUST_LOG` says otherwise.
    File(PathBuf),
}

/// Install the global `tracing` subscriber for `target`.
pub fn init(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
    }
    Ok(())
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "paperfile",
    about = "Upload a Word document for grammar checking and get a link to the corrected file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Document to check as soon as the app starts.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Base url of the grammar-check service (overrides the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Config file to use instead of ./paperfile.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one document without the full-screen UI and print the download link.
    Check {
        /// Document to upload.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the final state as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_argument_is_optional() {
        let cli = Cli::try_parse_from(["paperfile"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_with_global_server() {
        let cli =
            Cli::try_parse_from(["paperfile", "check", "a.docx", "--json", "--server", "http://h/"])
                .unwrap();
        assert_eq!(cli.server.as_deref(), Some("http://h/"));
        match cli.command {
            Some(Command::Check { file, json }) => {
                assert_eq!(file, PathBuf::from("a.docx"));
                assert!(json);
            }
            None => panic!("expected check subcommand"),
        }
    }
}

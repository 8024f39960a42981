use std::path::{Path, PathBuf};

use crate::state::AppState;
use crate::upload::UploadError;

/// A document picked by the user. The contents are read by the upload
/// effect, not when the event is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name sent in the multipart part. Falls back to `document`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| "document".to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// MIME type derived from the extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("doc") => "application/msword",
            _ => "application/octet-stream",
        }
    }
}

/// Everything the dispatcher reacts to: user interaction and completed
/// async work.
#[derive(Debug)]
pub enum Event {
    /// Application boot, carrying the state to start from.
    AppStarted(AppState),
    /// A path was typed on the input line (or given on the command line).
    FileSelected(DocumentFile),
    /// The terminal gained focus.
    EnteredDropZone,
    /// The terminal lost focus.
    LeftDropZone,
    /// A file was dropped onto the terminal (arrives as a bracketed paste).
    DroppedFileInDropZone(DocumentFile),
    /// The user asked to start over.
    ClickedRestart,
    /// Upload finished; carries the download url.
    RequestSucceeded(String),
    /// Upload failed for any reason.
    RequestErrored(UploadError),
}

impl Event {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Event::AppStarted(_) => "AppStarted",
            Event::FileSelected(_) => "FileSelected",
            Event::EnteredDropZone => "EnteredDropZone",
            Event::LeftDropZone => "LeftDropZone",
            Event::DroppedFileInDropZone(_) => "DroppedFileInDropZone",
            Event::ClickedRestart => "ClickedRestart",
            Event::RequestSucceeded(_) => "RequestSucceeded",
            Event::RequestErrored(_) => "RequestErrored",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_from_extension() {
        assert_eq!(
            DocumentFile::new("a/report.docx").mime_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(DocumentFile::new("old.DOC").mime_type(), "application/msword");
        assert_eq!(
            DocumentFile::new("notes.txt").mime_type(),
            "application/octet-stream"
        );
        assert_eq!(DocumentFile::new("README").mime_type(), "application/octet-stream");
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(DocumentFile::new("/tmp/x/report.docx").file_name(), "report.docx");
        assert_eq!(DocumentFile::new("/").file_name(), "document");
    }
}

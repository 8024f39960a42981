#![allow(clippy::expect_used, clippy::panic)]

use std::sync::Mutex;

use futures::future::{self, BoxFuture};
use paperfile::dispatcher::Dispatcher;
use paperfile::display::renderer::{Renderer, TerminalView};
use paperfile::event::{DocumentFile, Event};
use paperfile::state::{AppState, ControlState};
use paperfile::upload::{UploadError, Uploader};
use tokio::sync::mpsc;

/// Records uploads and never settles them. Completions come from the script.
#[derive(Default)]
struct ScriptedUploader {
    files: Mutex<Vec<DocumentFile>>,
}

impl Uploader for ScriptedUploader {
    fn upload(&self, file: DocumentFile) -> BoxFuture<'static, Result<String, UploadError>> {
        self.files.lock().expect("uploader lock").push(file);
        Box::pin(future::pending())
    }
}

struct Replay {
    state: AppState,
    /// The last painted screen, ANSI stripped.
    frame: String,
    uploads: Vec<DocumentFile>,
}

/// Parse one script line into an event.
///
/// `start`, `enter`, `leave`, `restart`, `drop <path>`, `select <path>`,
/// `succeed <url>`, `fail <body>`.
fn parse_step(line: &str) -> Event {
    let (verb, arg) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "start" => Event::AppStarted(AppState::initial()),
        "enter" => Event::EnteredDropZone,
        "leave" => Event::LeftDropZone,
        "restart" => Event::ClickedRestart,
        "drop" => Event::DroppedFileInDropZone(DocumentFile::new(arg)),
        "select" => Event::FileSelected(DocumentFile::new(arg)),
        "succeed" => Event::RequestSucceeded(arg.to_string()),
        "fail" => Event::RequestErrored(UploadError::Status {
            status: 500,
            body: arg.to_string(),
        }),
        other => panic!("unknown script verb: {other}"),
    }
}

/// Replay a script through a dispatcher with a writer-backed terminal view.
fn replay(script: &str) -> Replay {
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let uploader = std::sync::Arc::new(ScriptedUploader::default());
    let mut renderer = Renderer::with_writer(Vec::new());
    renderer.set_width(80);
    let mut dispatcher = Dispatcher::new(TerminalView::new(renderer), uploader.clone(), event_tx);

    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        dispatcher
            .dispatch(parse_step(line))
            .expect("dispatch should succeed");
    }

    let state = dispatcher.state().clone();
    let output = dispatcher.into_view().into_renderer().into_inner();
    let output = String::from_utf8(output).expect("Output should be valid UTF-8");
    let last = output.rsplit("\x1b[2J").next().unwrap_or_default();
    let frame = strip_ansi(last).replace("\r\n", "\n").trim_end().to_string();
    let uploads = uploader.files.lock().expect("uploader lock").clone();
    Replay {
        state,
        frame,
        uploads,
    }
}

/// Strip ANSI escape codes for readable snapshots.
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[tokio::test]
async fn start_shows_drop_zone() {
    let r = replay("start");
    assert_eq!(r.state, AppState::initial());
    insta::assert_snapshot!(r.frame, @r"
    paperfile

    Drop Word file here
    or
    Type the path of a Word file and press Enter

    Enter check · Esc clear · Ctrl+C quit
    Path:
    ");
}

#[tokio::test]
async fn hovering_highlights_drop_zone() {
    let r = replay("start\nenter");
    assert!(r.state.is_file_dragged_over);
    assert!(r.frame.contains(">> Drop Word file here <<"), "{}", r.frame);

    let r = replay("start\nenter\nleave");
    assert!(!r.state.is_file_dragged_over);
    assert!(!r.frame.contains(">>"), "{}", r.frame);
}

#[tokio::test]
async fn drop_then_success_then_restart() {
    let r = replay("start\nenter\ndrop /docs/a.docx");
    assert_eq!(r.state.control_state, ControlState::CheckingGrammar);
    assert!(!r.state.is_file_dragged_over);
    assert_eq!(r.uploads, vec![DocumentFile::new("/docs/a.docx")]);
    insta::assert_snapshot!(r.frame, @r"
    paperfile

    Checking grammar...

    Ctrl+C quit
    ");

    let r = replay("start\nenter\ndrop /docs/a.docx\nsucceed http://x/y.docx");
    assert_eq!(r.state.control_state, ControlState::FileAvailableForDownload);
    assert_eq!(r.state.download_url.as_deref(), Some("http://x/y.docx"));
    insta::assert_snapshot!(r.frame, @r"
    paperfile

    Download corrected file:
    http://x/y.docx

    r restart · q quit
    ");

    let r = replay("start\nenter\ndrop /docs/a.docx\nsucceed http://x/y.docx\nrestart");
    assert_eq!(r.state, AppState::initial());
    assert!(r.frame.ends_with("Path:"), "{}", r.frame);
}

#[tokio::test]
async fn select_then_failure() {
    let r = replay("start\nselect /docs/b.doc\nfail grammar engine crashed");
    assert_eq!(r.state.control_state, ControlState::RequestFailed);
    assert_eq!(r.state.download_url, None);
    assert_eq!(r.uploads, vec![DocumentFile::new("/docs/b.doc")]);
    insta::assert_snapshot!(r.frame, @r"
    paperfile

    Server failed!

    r restart · q quit
    ");
}

#[tokio::test]
async fn second_document_after_restart() {
    let r = replay(
        "start
         select /docs/a.docx
         succeed http://x/a.docx
         restart
         select /docs/b.docx",
    );
    assert_eq!(r.state.control_state, ControlState::CheckingGrammar);
    assert_eq!(r.state.download_url, None);
    assert_eq!(
        r.uploads,
        vec![DocumentFile::new("/docs/a.docx"), DocumentFile::new("/docs/b.docx")]
    );
}

#[tokio::test]
async fn stray_events_do_not_repaint() {
    let r = replay("start\nsucceed http://x/y.docx\nfail nope\nrestart\nleave");
    assert_eq!(r.state, AppState::initial());
    assert!(r.uploads.is_empty());

    // Drops while a check is running are ignored, so only one upload starts.
    let r = replay("start\ndrop /docs/a.docx\ndrop /docs/b.docx\nselect /docs/c.docx");
    assert_eq!(r.uploads, vec![DocumentFile::new("/docs/a.docx")]);
    assert!(r.frame.contains("Checking grammar..."));
}

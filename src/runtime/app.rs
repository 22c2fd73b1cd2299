//! Interactive shell
//!
//! Reads one command per line, runs it through `update`, performs the
//! resulting side effects and prints the active panel.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};

use crate::commands::Cmd;
use crate::input::parse_line;
use crate::messages::{Msg, SessionMsg, UiMsg};
use crate::model::AppModel;
use crate::update::update;
use crate::view;

use super::clipboard::Clipboard;

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<C: Clipboard> {
    model: AppModel,
    clipboard: C,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<C: Clipboard> App<C> {
    pub fn new(model: AppModel, clipboard: C) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            clipboard,
            msg_tx,
            msg_rx,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Run the read-eval-print loop until EOF or `quit`
    ///
    /// The prompt is only written when `interactive` is set, so piped
    /// scripts produce clean output.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        interactive: bool,
    ) -> Result<()> {
        self.redraw(out)?;

        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "{}", self.model.config.prompt)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                tracing::debug!("Input closed");
                break;
            };
            let line = line.context("Failed to read input")?;

            if self.dispatch(Msg::Ui(UiMsg::Tick), out)? == Flow::Quit {
                break;
            }

            let msg = match parse_line(&line) {
                Ok(Some(msg)) => msg,
                Ok(None) => continue,
                Err(e) => Msg::Ui(UiMsg::InputError(e.to_string())),
            };

            if self.dispatch(msg, out)? == Flow::Quit {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Update the model with one message, then drain any follow-up messages
    /// produced by the commands it triggered
    pub fn dispatch<W: Write>(&mut self, msg: Msg, out: &mut W) -> Result<Flow> {
        let mut next = Some(msg);
        while let Some(msg) = next.take().or_else(|| self.msg_rx.try_recv().ok()) {
            if let Some(cmd) = update(&mut self.model, msg) {
                if self.process_cmd(cmd, out)? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn process_cmd<W: Write>(&mut self, cmd: Cmd, out: &mut W) -> Result<Flow> {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.redraw(out)?,
            Cmd::CopyToClipboard { text } => {
                let chars = text.chars().count();
                let result = self.clipboard.set_text(&text).map(|()| chars);
                self.send(Msg::Session(SessionMsg::CopyCompleted(result)));
            }
            Cmd::LoadFile { path } => {
                let result = std::fs::read_to_string(&path)
                    .map(|content| (path.clone(), content))
                    .map_err(|e| format!("{}: {}", path.display(), e));
                self.send(Msg::Session(SessionMsg::Loaded(result)));
            }
            Cmd::SaveFile { path, content } => {
                let result = std::fs::write(&path, content)
                    .map(|()| path.clone())
                    .map_err(|e| format!("{}: {}", path.display(), e));
                self.send(Msg::Session(SessionMsg::Saved(result)));
            }
            Cmd::WriteEntities { path, json } => {
                let result = std::fs::write(&path, json)
                    .map(|()| path.clone())
                    .map_err(|e| format!("{}: {}", path.display(), e));
                self.send(Msg::Session(SessionMsg::Exported(result)));
            }
            Cmd::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn send(&self, msg: Msg) {
        // The receiver lives in self, so this cannot be disconnected
        let _ = self.msg_tx.send(msg);
    }

    fn redraw<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(view::render(&self.model).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::clipboard::MemoryClipboard;

    fn run_script(text: &str, script: &str) -> (App<MemoryClipboard>, String) {
        let mut app = App::new(AppModel::with_text(text), MemoryClipboard::default());
        let mut out = Vec::new();
        app.run(script.as_bytes(), &mut out, false).unwrap();
        (app, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_replace_and_restore() {
        let (app, _) = run_script("The cat sat on the cat mat.", "find cat\nreplace\n");
        assert_eq!(app.model().text(), "The [entity-1] sat on the [entity-1] mat.");

        let (app, _) = run_script(
            "The cat sat on the cat mat.",
            "find cat\nreplace\nfind mat\nreplace\nrestore\n",
        );
        assert_eq!(app.model().text(), "The cat sat on the cat mat.");
        assert_eq!(app.model().session.counter, 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (app, _) = run_script("abc", "quit\nedit changed\n");
        assert_eq!(app.model().text(), "abc");
    }

    #[test]
    fn test_copy_goes_to_clipboard() {
        let (app, out) = run_script("hello", "copy\n");
        assert_eq!(app.clipboard().contents.as_deref(), Some("hello"));
        assert!(out.contains("Copied!"), "{out}");
    }

    #[test]
    fn test_bad_input_reports_and_continues() {
        let (app, out) = run_script("abc", "frobnicate\nedit xyz\n");
        assert!(out.contains("unknown command `frobnicate`"), "{out}");
        assert_eq!(app.model().text(), "xyz");
    }

    #[test]
    fn test_map_panel_output() {
        let (_, out) = run_script("a cat", "find cat\nreplace\nmap\n");
        assert!(out.contains("[entity-1]  cat"), "{out}");
    }

    #[test]
    fn test_save_and_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let script = format!(
            "find cat\nreplace\nsave {}\nedit scratch\nopen {}\n",
            path.display(),
            path.display()
        );
        let (app, _) = run_script("a cat", &script);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a [entity-1]");
        assert_eq!(app.model().text(), "a [entity-1]");
        assert!(app.model().session.entities.is_empty());
        assert_eq!(app.model().session.document.file_path.as_ref(), Some(&path));
    }
}

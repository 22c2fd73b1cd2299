//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

/// Session messages (document edits, selection, substitution, file I/O)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMsg {
    // === Editing ===
    /// Overwrite the whole document with typed text
    SetText(String),
    /// Append a line of typed text to the document
    AppendLine(String),

    // === Selection ===
    /// Select the characters between two offsets
    Select { start: usize, end: usize },
    /// Select the first literal occurrence of some text
    SelectText(String),
    /// Forget the pending selection
    ClearSelection,

    // === Substitution ===
    /// Replace the pending selection everywhere with a new entity
    ReplaceSelection,
    /// Put every entity's original text back
    RestoreAll,

    // === Clipboard ===
    /// Copy the document to the clipboard
    Copy,
    /// Clipboard write finished (chars copied, or error message)
    CopyCompleted(Result<usize, String>),

    // === Files ===
    /// Load a document from disk, replacing the session
    Open(PathBuf),
    /// File load finished
    Loaded(Result<(PathBuf, String), String>),
    /// Save the document (to its own path when None)
    Save(Option<PathBuf>),
    /// File save finished
    Saved(Result<PathBuf, String>),
    /// Write the entity map as JSON
    ExportEntities(PathBuf),
    /// Entity map export finished
    Exported(Result<PathBuf, String>),
}

/// UI messages (panels, status expiry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Periodic tick; expires transient messages
    Tick,
    /// Show the document
    ShowDocument,
    /// Show the entity map table
    ShowEntities,
    /// Show the command reference
    ShowHelp,
    /// Show where the log file lives
    ShowLogFile,
    /// Report an input problem in the status line
    InputError(String),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Leave the shell
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Session(SessionMsg),
    Ui(UiMsg),
    App(AppMsg),
}

//! Application model - the complete state of the shell
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod session;
pub mod status_bar;
pub mod ui;

pub use document::Document;
pub use session::{Selection, Session};
pub use status_bar::{
    sync_status_bar, SegmentContent, SegmentId, SegmentPosition, StatusBar, StatusSegment,
    TransientMessage,
};
pub use ui::{Panel, UiState};

use crate::config::EntityConfig;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The document being edited and its entity map
    pub session: Session,
    /// UI state (status bar, transient feedback, panel)
    pub ui: UiState,
    /// Persisted configuration
    pub config: EntityConfig,
}

impl AppModel {
    /// Create a model around an already loaded document
    pub fn new(document: Document, config: EntityConfig) -> Self {
        let status = match &document.file_path {
            Some(path) => format!("Loaded: {}", path.display()),
            None => "New document".to_string(),
        };
        let mut model = Self {
            session: Session::new(document),
            ui: UiState::with_status(status),
            config,
        };
        sync_status_bar(&mut model);
        model
    }

    /// Create a model with plain text and default configuration
    pub fn with_text(text: &str) -> Self {
        Self::new(Document::with_text(text), EntityConfig::default())
    }

    /// Current document text
    pub fn text(&self) -> String {
        self.session.document.buffer.to_string()
    }
}

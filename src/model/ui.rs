//! UI state - status line, transient feedback and the active panel

use super::status_bar::{StatusBar, TransientMessage};
use std::time::Duration;

/// Which view the shell prints after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// The document text and status line
    #[default]
    Document,
    /// The entity map table
    Entities,
    /// Command reference
    Help,
}

/// UI state - status messages and panel selection
#[derive(Debug, Clone)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Whether a clipboard write is in flight
    pub is_copying: bool,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
    /// Panel to show on the next redraw
    pub panel: Panel,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self::with_status("")
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            status_bar: StatusBar::new(),
            transient_message: None,
            is_copying: false,
            is_loading: false,
            is_saving: false,
            panel: Panel::Document,
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show a message that disappears after `duration`
    pub fn flash(&mut self, message: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(message, duration));
    }

    /// Drop the transient message once expired
    /// Returns true if the state changed (needs redraw)
    pub fn expire_transient(&mut self) -> bool {
        match &self.transient_message {
            Some(msg) if msg.is_expired() => {
                self.transient_message = None;
                true
            }
            _ => false,
        }
    }

    /// Check if the UI is busy (copying, loading or saving)
    ///
    /// Open and save are refused while busy so a load never lands on top
    /// of a pending write.
    pub fn is_busy(&self) -> bool {
        self.is_copying || self.is_loading || self.is_saving
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

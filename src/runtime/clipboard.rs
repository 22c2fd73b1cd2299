//! Clipboard access
//!
//! The shell only ever writes text. Failures are reported back as strings
//! and never touch session state.

/// Somewhere copied text can go
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard via arboard
///
/// The handle is opened on first use and kept, since on some platforms the
/// clipboard contents live only as long as the handle does.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().map_err(|e| e.to_string())?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(|e| e.to_string()),
            None => Err("clipboard unavailable".to_string()),
        }
    }
}

/// In-memory clipboard for tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every write fails with this message
    pub fail_with: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

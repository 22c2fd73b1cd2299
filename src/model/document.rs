//! Document model - the text buffer and its file state

use ropey::Rope;
use std::path::PathBuf;

use crate::engine;

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved text)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Document revision counter (incremented on each edit)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            is_modified: false,
            revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self {
            buffer: Rope::from(content),
            file_path: Some(path),
            is_modified: false,
            revision: 0,
        })
    }

    /// Get the display name for this document.
    /// Returns the filename if there is one, or "[No Name]" as fallback.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.file_path.as_ref().and_then(|p| p.file_name()) {
            return name.to_string_lossy().to_string();
        }
        "[No Name]".to_string()
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    /// Replace the whole buffer (manual edits and engine results)
    ///
    /// Setting identical text is not an edit and leaves the revision alone.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer == text {
            return;
        }
        self.buffer = Rope::from(text);
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Text between two char offsets, clamped to the buffer
    pub fn slice_chars(&self, start: usize, end: usize) -> String {
        let len = self.buffer.len_chars();
        let (start, end) = (start.min(len), end.min(len));
        if start >= end {
            return String::new();
        }
        self.buffer.slice(start..end).to_string()
    }

    /// First literal occurrence of `needle` as char offsets
    pub fn find_first(&self, needle: &str) -> Option<(usize, usize)> {
        self.find_all_occurrences(needle).into_iter().next()
    }

    /// All non-overlapping literal occurrences of `needle`
    /// Returns Vec of (start_char_offset, end_char_offset) in character indices
    pub fn find_all_occurrences(&self, needle: &str) -> Vec<(usize, usize)> {
        let haystack = self.buffer.to_string();
        engine::occurrences(&haystack, needle)
            .into_iter()
            .map(|range| {
                (
                    self.buffer.byte_to_char(range.start),
                    self.buffer.byte_to_char(range.end),
                )
            })
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

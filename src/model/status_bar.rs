//! Status bar model - segments and layout
//!
//! The status line printed under the document is built from segments, left
//! aligned and right aligned, that `sync_status_bar` refreshes after every
//! update.

use std::time::{Duration, Instant};

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// File name display
    FileName,
    /// Modified indicator (e.g., "*")
    ModifiedIndicator,
    /// Transient status messages (e.g., "Copied!")
    StatusMessage,
    /// Pending selection (e.g., "sel 4..7 (3 chars)")
    Selection,
    /// Active entity count (e.g., "2 entities")
    EntityCount,
    /// Document length (e.g., "27 chars")
    CharCount,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        match self {
            SegmentContent::Empty => true,
            SegmentContent::Text(s) => s.is_empty(),
        }
    }

    /// Get the character width of this content
    pub fn char_width(&self) -> usize {
        self.display_text().chars().count()
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
}

impl StatusSegment {
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::FileName | SegmentId::ModifiedIndicator | SegmentId::StatusMessage => {
                SegmentPosition::Left
            }
            SegmentId::Selection | SegmentId::EntityCount | SegmentId::CharCount => {
                SegmentPosition::Right
            }
        };
        Self {
            id,
            position,
            content,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(
                    SegmentId::FileName,
                    SegmentContent::Text("[No Name]".into()),
                ),
                StatusSegment::new(SegmentId::ModifiedIndicator, SegmentContent::Empty),
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(SegmentId::Selection, SegmentContent::Empty),
                StatusSegment::new(SegmentId::EntityCount, SegmentContent::Empty),
                StatusSegment::new(SegmentId::CharCount, SegmentContent::Text("0 chars".into())),
            ],
            separator_spacing: 2,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }

    /// Text of a segment, empty if hidden
    pub fn segment_text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }

    fn joined(&self, position: SegmentPosition) -> String {
        let sep = " ".repeat(self.separator_spacing);
        self.segments
            .iter()
            .filter(|s| s.position == position && !s.content.is_empty())
            .map(|s| s.content.display_text())
            .collect::<Vec<_>>()
            .join(&sep)
    }

    /// Lay the segments out on one line of `width` characters
    ///
    /// Right segments are pushed to the right edge; when the line is too
    /// narrow they follow the left segments after the usual spacing.
    pub fn render_line(&self, width: usize) -> String {
        let left = self.joined(SegmentPosition::Left);
        let right = self.joined(SegmentPosition::Right);
        if right.is_empty() {
            return left;
        }

        let used = left.chars().count() + right.chars().count();
        let gap = width
            .saturating_sub(used)
            .max(if left.is_empty() { 0 } else { self.separator_spacing });
        format!("{}{}{}", left, " ".repeat(gap), right)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with current session state
pub fn sync_status_bar(model: &mut AppModel) {
    let filename = model.session.document.display_name();
    let modified = if model.session.document.is_modified {
        SegmentContent::Text("*".to_string())
    } else {
        SegmentContent::Empty
    };

    // Transient messages win over the plain status message until they expire
    let message = match &model.ui.transient_message {
        Some(t) if !t.is_expired() => t.text.clone(),
        _ => model.ui.status_message.clone(),
    };

    let selection = match &model.session.selection {
        Some(sel) => SegmentContent::Text(format!(
            "sel {}..{} ({} chars)",
            sel.start,
            sel.end,
            sel.len()
        )),
        None => SegmentContent::Empty,
    };

    let entities = match model.session.entities.len() {
        0 => SegmentContent::Empty,
        1 => SegmentContent::Text("1 entity".to_string()),
        n => SegmentContent::Text(format!("{} entities", n)),
    };

    let chars = format!("{} chars", model.session.document.char_len());

    let bar = &mut model.ui.status_bar;
    bar.update_segment(SegmentId::FileName, SegmentContent::Text(filename));
    bar.update_segment(SegmentId::ModifiedIndicator, modified);
    bar.update_segment(SegmentId::StatusMessage, SegmentContent::Text(message));
    bar.update_segment(SegmentId::Selection, selection);
    bar.update_segment(SegmentId::EntityCount, entities);
    bar.update_segment(SegmentId::CharCount, SegmentContent::Text(chars));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_char_width_counts_chars() {
        assert_eq!(SegmentContent::Text("héllo".into()).char_width(), 5);
        assert_eq!(SegmentContent::Empty.char_width(), 0);
    }

    #[test]
    fn test_render_line_pads_to_width() {
        let bar = StatusBar::new();
        let line = bar.render_line(30);
        assert!(line.starts_with("[No Name]"));
        assert!(line.ends_with("0 chars"));
        assert_eq!(line.chars().count(), 30);
    }

    #[test]
    fn test_render_line_narrow_width_keeps_spacing() {
        let mut bar = StatusBar::new();
        bar.update_segment(SegmentId::FileName, SegmentContent::Text("a-long-name.txt".into()));
        let line = bar.render_line(5);
        assert_eq!(line, "a-long-name.txt  0 chars");
    }

    #[test]
    fn test_hidden_segments_are_skipped() {
        let mut bar = StatusBar::new();
        bar.update_segment(SegmentId::ModifiedIndicator, SegmentContent::Text("*".into()));
        bar.update_segment(SegmentId::EntityCount, SegmentContent::Text("2 entities".into()));
        let line = bar.render_line(0);
        assert_eq!(line, "[No Name]  *  2 entities  0 chars");
    }

    #[test]
    fn test_transient_message_expiry() {
        let msg = TransientMessage::new("Copied!", Duration::from_secs(60));
        assert!(!msg.is_expired());
        let msg = TransientMessage::new("Copied!", Duration::ZERO);
        assert!(msg.is_expired());
    }
}

//! Session model - the document plus the substitutions applied to it

use super::document::Document;
use crate::engine::{self, EngineError, EntityMap, Replacement, Restoration, SessionState};

/// The most recent non-empty selection, in character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Selection {
    /// Capture a selection from the document
    ///
    /// Reversed ranges are normalized; an empty range yields `None`.
    pub fn from_range(document: &Document, start: usize, end: usize) -> Option<Self> {
        let (start, end) = (start.min(end), start.max(end));
        let text = document.slice_chars(start, end);
        if text.is_empty() {
            return None;
        }
        let end = start + text.chars().count();
        Some(Self { start, end, text })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One editing session: a single document and its entity map
#[derive(Debug, Clone)]
pub struct Session {
    pub document: Document,
    pub entities: EntityMap,
    /// Number the next placeholder will use
    pub counter: u64,
    /// Pending selection, offered for replacement
    pub selection: Option<Selection>,
}

impl Session {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            entities: EntityMap::new(),
            counter: engine::FIRST_ENTITY,
            selection: None,
        }
    }

    /// Snapshot for the engine
    pub fn state(&self) -> SessionState {
        SessionState {
            document: self.document.buffer.to_string(),
            entities: self.entities.clone(),
            counter: self.counter,
        }
    }

    /// Store an engine result
    pub fn apply(&mut self, state: SessionState) {
        self.document.set_text(&state.document);
        self.entities = state.entities;
        self.counter = state.counter;
    }

    /// Remember a selection; empty ranges clear it
    pub fn select(&mut self, start: usize, end: usize) -> Option<&Selection> {
        self.selection = Selection::from_range(&self.document, start, end);
        self.selection.as_ref()
    }

    /// Overwrite the document with user-typed text
    ///
    /// Any pending selection refers to the old text and is dropped.
    pub fn edit(&mut self, text: &str) {
        self.document.set_text(text);
        self.selection = None;
    }

    /// Replace the pending selection everywhere with a new placeholder
    ///
    /// The selection is consumed whether or not the engine accepts it.
    pub fn replace_selection(&mut self) -> Result<Replacement, EngineError> {
        let selection = self.selection.take().ok_or(EngineError::EmptySelection)?;
        let (state, outcome) = engine::replace(&self.state(), &selection.text)?;
        self.apply(state);
        Ok(outcome)
    }

    /// Restore every placeholder; `None` when there is nothing to restore
    pub fn restore_all(&mut self) -> Option<Restoration> {
        if !self.has_entities() {
            return None;
        }
        let (state, outcome) = engine::restore_all(&self.state());
        self.apply(state);
        self.selection = None;
        Some(outcome)
    }

    pub fn has_entities(&self) -> bool {
        !self.entities.is_empty()
    }

    /// Panic if the counter has fallen behind the entity map
    ///
    /// Called after every traced update in debug builds.
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Some(highest) = self.entities.highest() {
            assert!(
                self.counter > highest.number(),
                "[{}] counter {} not past highest entity {}",
                context,
                self.counter,
                highest
            );
        } else {
            assert!(
                self.counter >= engine::FIRST_ENTITY,
                "[{}] counter {} below first entity",
                context,
                self.counter
            );
        }
        if let Some(sel) = &self.selection {
            assert!(
                !sel.text.is_empty() && sel.end <= self.document.char_len(),
                "[{}] stale selection {}..{}",
                context,
                sel.start,
                sel.end
            );
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

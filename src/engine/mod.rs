//! Entity substitution engine
//!
//! Pure transformations over the `(document, entities, counter)` triple.
//! Nothing in here touches the terminal, the clipboard or the filesystem;
//! the session model feeds state in and stores what comes back.

mod entity;
mod scan;

pub use entity::{
    EntityKey, EntityMap, FIRST_ENTITY, MAX_ENTITY, PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX,
};
pub use scan::{occurrences, placeholder_spans, replace_outside, PlaceholderSpan};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a substitution request is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("nothing selected")]
    EmptySelection,

    #[error("selection contains the placeholder {0}")]
    ContainsPlaceholder(EntityKey),

    #[error("selection {start}..{end} is outside the document (length {len})")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("no entity numbers left (counter {0})")]
    CounterExhausted(u64),
}

/// Document text, entity map and next counter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub document: String,
    pub entities: EntityMap,
    pub counter: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new("")
    }
}

impl SessionState {
    /// Fresh state for a document with no substitutions
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            entities: EntityMap::new(),
            counter: FIRST_ENTITY,
        }
    }

    /// Placeholder the next replace will generate
    ///
    /// A counter below the first entity is treated as a fresh session;
    /// `None` once every entity number has been used.
    pub fn next_key(&self) -> Option<EntityKey> {
        EntityKey::new(self.counter.max(FIRST_ENTITY))
    }
}

/// Result of a successful replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The placeholder that was generated
    pub key: EntityKey,
    /// How many occurrences of the selection were substituted
    pub occurrences: usize,
}

/// Result of a restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restoration {
    /// Placeholder occurrences that were turned back into text
    pub restored: usize,
    /// Entities that were dropped from the map
    pub entities_cleared: usize,
}

/// Replace every occurrence of `selected` with a fresh placeholder
///
/// Placeholders already present in the document are left alone, and a
/// selection that itself contains an active placeholder is refused.
pub fn replace(
    state: &SessionState,
    selected: &str,
) -> Result<(SessionState, Replacement), EngineError> {
    if selected.is_empty() {
        return Err(EngineError::EmptySelection);
    }
    if let Some(span) = placeholder_spans(selected, &state.entities).first() {
        return Err(EngineError::ContainsPlaceholder(span.key));
    }

    let key = state
        .next_key()
        .ok_or(EngineError::CounterExhausted(state.counter))?;
    let token = key.to_string();
    let protected = placeholder_spans(&state.document, &state.entities);
    let (document, count) = replace_outside(&state.document, selected, &token, &protected);

    let mut entities = state.entities.clone();
    entities.insert(key, selected);

    tracing::debug!(
        entity = %key,
        occurrences = count,
        selected_len = selected.len(),
        "replaced selection with entity"
    );

    Ok((
        SessionState {
            document,
            entities,
            counter: key.number() + 1,
        },
        Replacement {
            key,
            occurrences: count,
        },
    ))
}

/// Replace the text between two char offsets (and everywhere else it occurs)
///
/// Offsets are in characters, matching how the shell reports selections.
/// Reversed offsets are normalized.
pub fn replace_range(
    state: &SessionState,
    start: usize,
    end: usize,
) -> Result<(SessionState, Replacement), EngineError> {
    let (start, end) = (start.min(end), start.max(end));
    let len = state.document.chars().count();
    if end > len {
        return Err(EngineError::InvalidRange { start, end, len });
    }
    let selected: String = state
        .document
        .chars()
        .skip(start)
        .take(end - start)
        .collect();
    replace(state, &selected)
}

/// Put every original back and reset the session
///
/// Works in a single pass, so restored text is never itself rescanned for
/// placeholders. Tokens without a map entry stay as typed.
pub fn restore_all(state: &SessionState) -> (SessionState, Restoration) {
    let spans = placeholder_spans(&state.document, &state.entities);
    let mut document = String::with_capacity(state.document.len());
    let mut last = 0;

    for span in &spans {
        document.push_str(&state.document[last..span.range.start]);
        document.push_str(state.entities.get(span.key).unwrap_or_default());
        last = span.range.end;
    }
    document.push_str(&state.document[last..]);

    tracing::debug!(
        restored = spans.len(),
        entities = state.entities.len(),
        "restored all entities"
    );

    (
        SessionState::new(document),
        Restoration {
            restored: spans.len(),
            entities_cleared: state.entities.len(),
        },
    )
}

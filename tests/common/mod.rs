//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use entity_replacer::commands::Cmd;
use entity_replacer::config::EntityConfig;
use entity_replacer::messages::{Msg, SessionMsg};
use entity_replacer::model::{AppModel, Document};
use entity_replacer::update::update;

/// Create a test model with given text and default configuration
pub fn test_model(text: &str) -> AppModel {
    AppModel::new(Document::with_text(text), EntityConfig::default())
}

/// Create a test model with a selection already made (char offsets)
pub fn test_model_with_selection(text: &str, start: usize, end: usize) -> AppModel {
    let mut model = test_model(text);
    update(&mut model, Msg::Session(SessionMsg::Select { start, end }));
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.session.document.buffer.to_string()
}

/// Select the first occurrence of `needle`, then replace it everywhere
pub fn find_and_replace(model: &mut AppModel, needle: &str) -> Option<Cmd> {
    update(model, Msg::Session(SessionMsg::SelectText(needle.to_string())));
    update(model, Msg::Session(SessionMsg::ReplaceSelection))
}

/// Current status bar message
pub fn status(model: &AppModel) -> &str {
    &model.ui.status_message
}

//! Session message handlers (editing, selection, substitution, files)

use crate::commands::Cmd;
use crate::engine::EngineError;
use crate::messages::SessionMsg;
use crate::model::{AppModel, Document, Panel, Session};

/// Longest selection excerpt quoted in status messages
const EXCERPT_CHARS: usize = 24;

/// Handle session messages
pub fn update_session(model: &mut AppModel, msg: SessionMsg) -> Option<Cmd> {
    model.ui.panel = Panel::Document;

    match msg {
        SessionMsg::SetText(text) => {
            model.session.edit(&text);
            model.ui.set_status("Edited");
            Some(Cmd::Redraw)
        }

        SessionMsg::AppendLine(line) => {
            let mut text = model.text();
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&line);
            model.session.edit(&text);
            model.ui.set_status("Edited");
            Some(Cmd::Redraw)
        }

        SessionMsg::Select { start, end } => {
            match model.session.select(start, end) {
                Some(sel) => {
                    let status = format!(
                        "Selected {} chars: {} - `replace` to substitute",
                        sel.len(),
                        excerpt(&sel.text)
                    );
                    model.ui.set_status(status);
                }
                None => model.ui.set_status("Empty selection"),
            }
            Some(Cmd::Redraw)
        }

        SessionMsg::SelectText(needle) => {
            match model.session.document.find_first(&needle) {
                Some((start, end)) => update_session(model, SessionMsg::Select { start, end }),
                None => {
                    model.session.selection = None;
                    model.ui.set_status(format!("Not found: {}", excerpt(&needle)));
                    Some(Cmd::Redraw)
                }
            }
        }

        SessionMsg::ClearSelection => {
            model.session.selection = None;
            model.ui.set_status("Selection cleared");
            Some(Cmd::Redraw)
        }

        SessionMsg::ReplaceSelection => match model.session.replace_selection() {
            Ok(outcome) => {
                let original = model
                    .session
                    .entities
                    .get(outcome.key)
                    .map(excerpt)
                    .unwrap_or_default();
                let status = match outcome.occurrences {
                    0 => format!("{} recorded for {} (no occurrences left)", outcome.key, original),
                    1 => format!("Replaced 1 occurrence of {} with {}", original, outcome.key),
                    n => format!("Replaced {} occurrences of {} with {}", n, original, outcome.key),
                };
                model.ui.set_status(status);
                Some(Cmd::Redraw)
            }
            Err(EngineError::EmptySelection) => {
                tracing::debug!("replace requested without a selection; ignoring");
                None
            }
            Err(e) => {
                tracing::info!("replace refused: {}", e);
                model.ui.set_status(format!("Not replaced: {}", e));
                Some(Cmd::Redraw)
            }
        },

        SessionMsg::RestoreAll => match model.session.restore_all() {
            Some(outcome) => {
                model.ui.set_status(format!(
                    "Restored {} placeholders from {} entities",
                    outcome.restored, outcome.entities_cleared
                ));
                Some(Cmd::Redraw)
            }
            None => {
                tracing::debug!("restore requested with no entities; ignoring");
                None
            }
        },

        SessionMsg::Copy => {
            if model.ui.is_copying {
                return None;
            }
            model.ui.is_copying = true;
            Some(Cmd::CopyToClipboard { text: model.text() })
        }

        SessionMsg::CopyCompleted(result) => {
            model.ui.is_copying = false;
            match result {
                Ok(chars) => {
                    model
                        .ui
                        .flash(format!("Copied! ({} chars)", chars), model.config.copy_feedback());
                }
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    model.ui.set_status(format!("Copy failed: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        SessionMsg::Open(path) => {
            if model.ui.is_busy() {
                tracing::debug!("open requested while busy; ignoring");
                return None;
            }
            model.ui.is_loading = true;
            model.ui.set_status(format!("Loading {}...", path.display()));
            Some(Cmd::LoadFile { path })
        }

        SessionMsg::Loaded(result) => {
            model.ui.is_loading = false;
            match result {
                Ok((path, content)) => {
                    let mut document = Document::with_text(&content);
                    model.ui.set_status(format!("Loaded: {}", path.display()));
                    document.file_path = Some(path);
                    model.session = Session::new(document);
                }
                Err(e) => {
                    tracing::warn!("Failed to load document: {}", e);
                    model.ui.set_status(format!("Error loading: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        SessionMsg::Save(path) => {
            if model.ui.is_busy() {
                tracing::debug!("save requested while busy; ignoring");
                return None;
            }
            let Some(path) = path.or_else(|| model.session.document.file_path.clone()) else {
                model.ui.set_status("No file path - use `save <path>`");
                return Some(Cmd::Redraw);
            };
            model.ui.is_saving = true;
            model.ui.set_status("Saving...");
            Some(Cmd::SaveFile {
                path,
                content: model.text(),
            })
        }

        SessionMsg::Saved(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(path) => {
                    model.ui.set_status(format!("Saved: {}", path.display()));
                    model.session.document.file_path = Some(path);
                    model.session.document.is_modified = false;
                }
                Err(e) => {
                    tracing::warn!("Failed to save document: {}", e);
                    model.ui.set_status(format!("Error saving: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        SessionMsg::ExportEntities(path) => {
            match serde_json::to_string_pretty(&model.session.entities) {
                Ok(json) => Some(Cmd::WriteEntities { path, json }),
                Err(e) => {
                    model.ui.set_status(format!("Failed to serialize entities: {}", e));
                    Some(Cmd::Redraw)
                }
            }
        }

        SessionMsg::Exported(result) => {
            match result {
                Ok(path) => model.ui.set_status(format!(
                    "Exported {} entities to {}",
                    model.session.entities.len(),
                    path.display()
                )),
                Err(e) => {
                    tracing::warn!("Failed to export entities: {}", e);
                    model.ui.set_status(format!("Error exporting: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Quote text for a status line, truncated and on one line
fn excerpt(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() > EXCERPT_CHARS {
        let cut: String = flat.chars().take(EXCERPT_CHARS - 1).collect();
        format!("\"{}…\"", cut)
    } else {
        format!("\"{}\"", flat)
    }
}

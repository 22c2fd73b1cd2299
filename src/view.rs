//! Text rendering of the model for the terminal shell

use std::fmt::Write as _;

use crate::commands::COMMANDS;
use crate::engine::EntityMap;
use crate::model::{AppModel, Panel};

/// Widest the "Original" column gets before values are truncated
const ORIGINAL_COLUMN_MAX: usize = 48;

/// Render whatever panel is active
pub fn render(model: &AppModel) -> String {
    match model.ui.panel {
        Panel::Document => render_document(model),
        Panel::Entities => render_entities(&model.session.entities),
        Panel::Help => render_help(),
    }
}

/// Document text followed by a rule and the status line
pub fn render_document(model: &AppModel) -> String {
    let width = model.config.status_width.max(1);
    let mut out = String::new();

    if model.config.echo_document {
        let text = model.text();
        out.push_str(&text);
        if !text.ends_with('\n') {
            out.push('\n');
        }
    }

    out.push_str(&"─".repeat(width));
    out.push('\n');
    out.push_str(model.ui.status_bar.render_line(width).trim_end());
    out.push('\n');
    out
}

/// Two-column table of placeholders and their originals
pub fn render_entities(entities: &EntityMap) -> String {
    if entities.is_empty() {
        return "No entities yet\n".to_string();
    }

    let rows: Vec<(String, String)> = entities
        .iter()
        .map(|(key, original)| (key.to_string(), display_original(original)))
        .collect();

    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once("Entity".len()))
        .max()
        .unwrap_or(0);
    let original_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once("Original".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<key_width$}  Original", "Entity");
    let _ = writeln!(
        out,
        "{}  {}",
        "─".repeat(key_width),
        "─".repeat(original_width)
    );
    for (key, original) in rows {
        let _ = writeln!(out, "{:<key_width$}  {}", key, original);
    }
    out
}

/// Command reference
pub fn render_help() -> String {
    let mut out = String::from("Commands:\n");
    let usages: Vec<String> = COMMANDS
        .iter()
        .map(|cmd| {
            if cmd.usage.is_empty() {
                cmd.name.to_string()
            } else {
                format!("{} {}", cmd.name, cmd.usage)
            }
        })
        .collect();
    let width = usages.iter().map(|u| u.chars().count()).max().unwrap_or(0);

    for (cmd, usage) in COMMANDS.iter().zip(&usages) {
        let _ = write!(out, "  {:<width$}  {}", usage, cmd.label);
        if !cmd.aliases.is_empty() {
            let _ = write!(out, " (also: {})", cmd.aliases.join(", "));
        }
        out.push('\n');
    }
    out
}

/// Original text as a single table cell
fn display_original(original: &str) -> String {
    let flat: String = original
        .chars()
        .map(|c| match c {
            '\n' => '⏎',
            '\t' => ' ',
            c => c,
        })
        .collect();
    if flat.chars().count() > ORIGINAL_COLUMN_MAX {
        let cut: String = flat.chars().take(ORIGINAL_COLUMN_MAX - 1).collect();
        format!("{}…", cut)
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EntityKey;

    #[test]
    fn test_empty_entity_table() {
        assert_eq!(render_entities(&EntityMap::new()), "No entities yet\n");
    }

    #[test]
    fn test_entity_table_rows() {
        let mut map = EntityMap::new();
        map.insert(EntityKey::new(1).unwrap(), "cat");
        map.insert(EntityKey::new(2).unwrap(), "two\nlines");
        let table = render_entities(&map);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Entity      Original");
        assert_eq!(lines[2], "[entity-1]  cat");
        assert_eq!(lines[3], "[entity-2]  two⏎lines");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_long_originals_are_truncated() {
        let cell = display_original(&"x".repeat(100));
        assert_eq!(cell.chars().count(), ORIGINAL_COLUMN_MAX);
        assert!(cell.ends_with('…'));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = render_help();
        for cmd in COMMANDS {
            assert!(help.contains(cmd.label), "missing {}", cmd.name);
        }
    }

    #[test]
    fn test_document_panel_without_echo() {
        let mut model = AppModel::with_text("secret text");
        model.config.echo_document = false;
        let out = render_document(&model);
        assert!(!out.contains("secret text"));
        assert!(out.contains("[No Name]"));
    }
}

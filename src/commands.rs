//! Command types for the Elm-style architecture
//!
//! `Cmd` values describe side effects to perform after an update. The
//! registry below lists the shell commands a user can type.

use std::path::PathBuf;

// ============================================================================
// Shell Command Registry
// ============================================================================

/// Identifies a command the shell understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Selection
    Select,
    Find,
    Clear,

    // Substitution
    Replace,
    Restore,

    // Editing
    Edit,
    Append,

    // Clipboard and files
    Copy,
    Open,
    Save,
    Export,

    // Views
    Show,
    Map,
    Help,
    Log,

    // Application
    Quit,
}

/// A command definition for the shell
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Word typed to invoke the command
    pub name: &'static str,
    /// Alternative spellings
    pub aliases: &'static [&'static str],
    /// Argument synopsis shown in help
    pub usage: &'static str,
    pub label: &'static str,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::Select,
        name: "select",
        aliases: &["sel"],
        usage: "<start> <end>",
        label: "Select characters between two offsets",
    },
    CommandDef {
        id: CommandId::Find,
        name: "find",
        aliases: &["f"],
        usage: "<text>",
        label: "Select the first occurrence of text",
    },
    CommandDef {
        id: CommandId::Clear,
        name: "clear",
        aliases: &[],
        usage: "",
        label: "Clear the selection",
    },
    CommandDef {
        id: CommandId::Replace,
        name: "replace",
        aliases: &["r"],
        usage: "",
        label: "Replace selection with an entity",
    },
    CommandDef {
        id: CommandId::Restore,
        name: "restore",
        aliases: &["restore-all"],
        usage: "",
        label: "Restore all entities",
    },
    CommandDef {
        id: CommandId::Edit,
        name: "edit",
        aliases: &["set"],
        usage: "<text>",
        label: "Replace the document text",
    },
    CommandDef {
        id: CommandId::Append,
        name: "append",
        aliases: &["a"],
        usage: "<text>",
        label: "Append a line to the document",
    },
    CommandDef {
        id: CommandId::Copy,
        name: "copy",
        aliases: &["c"],
        usage: "",
        label: "Copy text to the clipboard",
    },
    CommandDef {
        id: CommandId::Open,
        name: "open",
        aliases: &["o"],
        usage: "<path>",
        label: "Open a document",
    },
    CommandDef {
        id: CommandId::Save,
        name: "save",
        aliases: &["w"],
        usage: "[path]",
        label: "Save the document",
    },
    CommandDef {
        id: CommandId::Export,
        name: "export",
        aliases: &[],
        usage: "<path>",
        label: "Export the entity map as JSON",
    },
    CommandDef {
        id: CommandId::Show,
        name: "show",
        aliases: &["p"],
        usage: "",
        label: "Show the document",
    },
    CommandDef {
        id: CommandId::Map,
        name: "map",
        aliases: &["entities"],
        usage: "",
        label: "Show the entity map",
    },
    CommandDef {
        id: CommandId::Help,
        name: "help",
        aliases: &["?"],
        usage: "",
        label: "Show this help",
    },
    CommandDef {
        id: CommandId::Log,
        name: "log",
        aliases: &[],
        usage: "",
        label: "Show the log file location",
    },
    CommandDef {
        id: CommandId::Quit,
        name: "quit",
        aliases: &["q", "exit"],
        usage: "",
        label: "Quit",
    },
];

/// Look up a command by its name or one of its aliases
pub fn lookup(word: &str) -> Option<&'static CommandDef> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.name == word || cmd.aliases.contains(&word))
}

/// Calculate fuzzy match score. Returns None if no match, Some(score) if matches.
/// Higher score = better match. Consecutive matches and word-start matches score higher.
fn fuzzy_match_score(query: &str, target: &str) -> Option<i32> {
    let query_chars: Vec<char> = query.to_lowercase().chars().collect();
    let target_lower = target.to_lowercase();
    let target_chars: Vec<char> = target_lower.chars().collect();

    if query_chars.is_empty() {
        return Some(0);
    }

    let mut query_idx = 0;
    let mut score = 0;
    let mut prev_matched = false;
    let mut prev_was_separator = true; // Start of string counts as separator

    for (i, &tc) in target_chars.iter().enumerate() {
        let is_separator = tc == ' ' || tc == '_' || tc == '-';

        if query_idx < query_chars.len() && tc == query_chars[query_idx] {
            score += 1;
            if prev_matched {
                score += 2;
            }
            if prev_was_separator {
                score += 3;
            }
            if i == 0 {
                score += 5;
            }
            query_idx += 1;
            prev_matched = true;
        } else {
            prev_matched = false;
        }

        prev_was_separator = is_separator;
    }

    // All query chars must be found
    if query_idx == query_chars.len() {
        Some(score)
    } else {
        None
    }
}

/// Filter commands by a query (fuzzy match on name), best matches first
pub fn filter_commands(query: &str) -> Vec<&'static CommandDef> {
    if query.is_empty() {
        return COMMANDS.iter().collect();
    }

    let mut matches: Vec<(&'static CommandDef, i32)> = COMMANDS
        .iter()
        .filter_map(|cmd| fuzzy_match_score(query, cmd.name).map(|score| (cmd, score)))
        .collect();

    // Stable sort keeps registry order among equal scores
    matches.sort_by(|a, b| b.1.cmp(&a.1));

    matches.into_iter().map(|(cmd, _)| cmd).collect()
}

/// Best guess for a mistyped command word
pub fn suggest(word: &str) -> Option<&'static CommandDef> {
    filter_commands(word).into_iter().next()
}

// ============================================================================
// Side Effects
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Print the active panel
    Redraw,
    /// Write text to the system clipboard
    /// Sends Msg::Session(CopyCompleted) when done
    CopyToClipboard { text: String },
    /// Read a file
    /// Sends Msg::Session(Loaded) when done
    LoadFile { path: PathBuf },
    /// Write a file
    /// Sends Msg::Session(Saved) when done
    SaveFile { path: PathBuf, content: String },
    /// Write the entity map
    /// Sends Msg::Session(Exported) when done
    WriteEntities { path: PathBuf, json: String },
    /// Request application exit
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_alias() {
        assert_eq!(lookup("replace").map(|c| c.id), Some(CommandId::Replace));
        assert_eq!(lookup("r").map(|c| c.id), Some(CommandId::Replace));
        assert_eq!(lookup("exit").map(|c| c.id), Some(CommandId::Quit));
        assert!(lookup("frobnicate").is_none());
    }

    #[test]
    fn test_names_and_aliases_are_unique() {
        let mut words: Vec<&str> = COMMANDS
            .iter()
            .flat_map(|c| std::iter::once(c.name).chain(c.aliases.iter().copied()))
            .collect();
        let total = words.len();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), total);
    }

    #[test]
    fn test_suggest_prefers_prefix() {
        assert_eq!(suggest("rest").map(|c| c.id), Some(CommandId::Restore));
        assert_eq!(suggest("expo").map(|c| c.id), Some(CommandId::Export));
        assert!(suggest("zzz").is_none());
    }

    #[test]
    fn test_filter_empty_query_lists_all() {
        assert_eq!(filter_commands("").len(), COMMANDS.len());
    }
}

//! Line input handling - maps typed shell commands to messages

use std::path::PathBuf;

use thiserror::Error;

use crate::commands::{self, CommandDef, CommandId};
use crate::messages::{AppMsg, Msg, SessionMsg, UiMsg};

/// Problems with a typed command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{word}`{}", suggestion_suffix(.suggestion))]
    UnknownCommand {
        word: String,
        suggestion: Option<&'static str>,
    },

    #[error("usage: {command} {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("`{command}` takes no arguments")]
    UnexpectedArgument { command: &'static str },

    #[error("not a character offset: `{0}`")]
    InvalidOffset(String),
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean `{}`?)", name),
        None => String::new(),
    }
}

/// Parse one line of shell input
///
/// Blank lines parse to `None`. Text arguments run to the end of the line,
/// trailing spaces included, and accept `\n`, `\t`, `\s` (space) and `\\`
/// escapes so multi-line documents and leading spaces can be typed.
pub fn parse_line(line: &str) -> Result<Option<Msg>, InputError> {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let Some(def) = commands::lookup(word) else {
        return Err(InputError::UnknownCommand {
            word: word.to_string(),
            suggestion: commands::suggest(word).map(|c| c.name),
        });
    };

    let msg = match def.id {
        CommandId::Select => {
            let mut parts = rest.split_whitespace();
            let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(missing(def));
            };
            Msg::Session(SessionMsg::Select {
                start: parse_offset(start)?,
                end: parse_offset(end)?,
            })
        }
        CommandId::Find => Msg::Session(SessionMsg::SelectText(required_text(def, rest)?)),
        CommandId::Clear => no_args(def, rest, Msg::Session(SessionMsg::ClearSelection))?,
        CommandId::Replace => no_args(def, rest, Msg::Session(SessionMsg::ReplaceSelection))?,
        CommandId::Restore => no_args(def, rest, Msg::Session(SessionMsg::RestoreAll))?,
        // An empty edit is a legitimate way to clear the document
        CommandId::Edit => Msg::Session(SessionMsg::SetText(unescape(rest))),
        CommandId::Append => Msg::Session(SessionMsg::AppendLine(unescape(rest))),
        CommandId::Copy => no_args(def, rest, Msg::Session(SessionMsg::Copy))?,
        CommandId::Open => Msg::Session(SessionMsg::Open(required_path(def, rest)?)),
        CommandId::Save => {
            let rest = rest.trim_end();
            let path = (!rest.is_empty()).then(|| PathBuf::from(rest));
            Msg::Session(SessionMsg::Save(path))
        }
        CommandId::Export => {
            Msg::Session(SessionMsg::ExportEntities(required_path(def, rest)?))
        }
        CommandId::Show => no_args(def, rest, Msg::Ui(UiMsg::ShowDocument))?,
        CommandId::Map => no_args(def, rest, Msg::Ui(UiMsg::ShowEntities))?,
        CommandId::Help => Msg::Ui(UiMsg::ShowHelp),
        CommandId::Log => no_args(def, rest, Msg::Ui(UiMsg::ShowLogFile))?,
        CommandId::Quit => Msg::App(AppMsg::Quit),
    };

    Ok(Some(msg))
}

fn missing(def: &CommandDef) -> InputError {
    InputError::MissingArgument {
        command: def.name,
        usage: def.usage,
    }
}

fn no_args(def: &CommandDef, rest: &str, msg: Msg) -> Result<Msg, InputError> {
    if rest.trim_end().is_empty() {
        Ok(msg)
    } else {
        Err(InputError::UnexpectedArgument { command: def.name })
    }
}

fn required_text(def: &CommandDef, rest: &str) -> Result<String, InputError> {
    if rest.is_empty() {
        return Err(missing(def));
    }
    Ok(unescape(rest))
}

fn required_path(def: &CommandDef, rest: &str) -> Result<PathBuf, InputError> {
    let rest = rest.trim_end();
    if rest.is_empty() {
        return Err(missing(def));
    }
    Ok(PathBuf::from(rest))
}

fn parse_offset(raw: &str) -> Result<usize, InputError> {
    raw.parse()
        .map_err(|_| InputError::InvalidOffset(raw.to_string()))
}

/// Expand `\n`, `\t`, `\s` and `\\`; any other backslash is kept as typed
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some('t') => {
                out.push('\t');
                chars.next();
            }
            Some('s') => {
                out.push(' ');
                chars.next();
            }
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Msg {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn test_select() {
        assert_eq!(
            parse("select 4 7"),
            Msg::Session(SessionMsg::Select { start: 4, end: 7 })
        );
        assert_eq!(
            parse("sel 7   4"),
            Msg::Session(SessionMsg::Select { start: 7, end: 4 })
        );
    }

    #[test]
    fn test_select_errors() {
        assert!(matches!(
            parse_line("select 4"),
            Err(InputError::MissingArgument { command: "select", .. })
        ));
        assert!(matches!(
            parse_line("select 1 2 3"),
            Err(InputError::MissingArgument { .. })
        ));
        assert_eq!(
            parse_line("select a 2"),
            Err(InputError::InvalidOffset("a".to_string()))
        );
        assert_eq!(
            parse_line("select -1 2"),
            Err(InputError::InvalidOffset("-1".to_string()))
        );
    }

    #[test]
    fn test_find_keeps_inner_spaces() {
        assert_eq!(
            parse("find  the  cat"),
            Msg::Session(SessionMsg::SelectText("the  cat".to_string()))
        );
    }

    #[test]
    fn test_edit_unescapes() {
        assert_eq!(
            parse(r"edit one\ntwo\tx \\n"),
            Msg::Session(SessionMsg::SetText("one\ntwo\tx \\n".to_string()))
        );
        assert_eq!(parse("edit"), Msg::Session(SessionMsg::SetText(String::new())));
    }

    #[test]
    fn test_no_arg_commands() {
        assert_eq!(parse("replace"), Msg::Session(SessionMsg::ReplaceSelection));
        assert_eq!(parse("r"), Msg::Session(SessionMsg::ReplaceSelection));
        assert_eq!(parse("restore"), Msg::Session(SessionMsg::RestoreAll));
        assert_eq!(parse("map"), Msg::Ui(UiMsg::ShowEntities));
        assert_eq!(parse("q"), Msg::App(AppMsg::Quit));
        assert_eq!(
            parse_line("replace now"),
            Err(InputError::UnexpectedArgument { command: "replace" })
        );
    }

    #[test]
    fn test_save_optional_path() {
        assert_eq!(parse("save"), Msg::Session(SessionMsg::Save(None)));
        assert_eq!(
            parse("save out/doc.txt"),
            Msg::Session(SessionMsg::Save(Some(PathBuf::from("out/doc.txt"))))
        );
    }

    #[test]
    fn test_open_requires_path() {
        assert!(matches!(
            parse_line("open"),
            Err(InputError::MissingArgument { command: "open", .. })
        ));
    }

    #[test]
    fn test_unknown_command_suggests() {
        let err = parse_line("restor").unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownCommand {
                word: "restor".to_string(),
                suggestion: Some("restore"),
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown command `restor` (did you mean `restore`?)"
        );
    }

    #[test]
    fn test_text_arguments_keep_trailing_spaces() {
        assert_eq!(
            parse("find cat \n"),
            Msg::Session(SessionMsg::SelectText("cat ".to_string()))
        );
        assert_eq!(
            parse("edit two  "),
            Msg::Session(SessionMsg::SetText("two  ".to_string()))
        );
        assert_eq!(
            parse(r"find \scat"),
            Msg::Session(SessionMsg::SelectText(" cat".to_string()))
        );
    }

    #[test]
    fn test_trailing_spaces_after_commands_and_paths() {
        assert_eq!(parse("replace  \r\n"), Msg::Session(SessionMsg::ReplaceSelection));
        assert_eq!(
            parse("save out.txt  "),
            Msg::Session(SessionMsg::Save(Some(PathBuf::from("out.txt"))))
        );
        assert_eq!(parse_line("  \t "), Ok(None));
    }

    #[test]
    fn test_unescape_trailing_backslash() {
        assert_eq!(unescape(r"a\"), "a\\");
        assert_eq!(unescape(r"\x"), "\\x");
    }
}

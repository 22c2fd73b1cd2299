//! Command-line argument parsing
//!
//! Supports:
//! - Interactive sessions on a file or an empty document
//! - Batch replacement of literal strings with `--replace`
//! - Restoring a document from an exported entity map

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replace text with entity placeholders and restore it later
#[derive(Parser, Debug)]
#[command(
    name = "entity-replacer",
    version,
    about = "Replace text with entity placeholders and restore it later",
    args_conflicts_with_subcommands = true
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Document to open (batch mode reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Replace every occurrence of TEXT with the next entity (repeatable, applied in order)
    #[arg(short = 'r', long = "replace", value_name = "TEXT")]
    pub replace: Vec<String>,

    /// Write the entity map as JSON (batch mode)
    #[arg(long, value_name = "PATH")]
    pub map_out: Option<PathBuf>,

    /// Write the resulting document here instead of stdout (batch mode)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy the resulting document to the clipboard (batch mode)
    #[arg(long)]
    pub copy: bool,

    /// Do not print the document after each change (interactive mode)
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Restore a document using an exported entity map
    Restore {
        /// Document containing placeholders (stdin when omitted)
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Entity map written by `--map-out` or `export`
        #[arg(short = 'm', long, value_name = "PATH")]
        map: PathBuf,

        /// Write the restored document here instead of stdout
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Copy the restored document to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

/// Where batch output goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputTarget {
    /// File to write; stdout when None
    pub path: Option<PathBuf>,
    /// Also copy to the clipboard
    pub copy: bool,
}

/// The startup mode determines what the binary does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Read commands from stdin against one document
    Interactive { path: Option<PathBuf> },
    /// Apply replacements once and print the result
    Batch {
        input: Option<PathBuf>,
        replacements: Vec<String>,
        map_out: Option<PathBuf>,
        output: OutputTarget,
    },
    /// Restore placeholders from a saved entity map
    Restore {
        input: Option<PathBuf>,
        map: PathBuf,
        output: OutputTarget,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Suppress document echo in interactive mode
    pub quiet: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(CliCommand::Restore {
            path,
            map,
            output,
            copy,
        }) = self.command
        {
            return Ok(StartupConfig {
                mode: StartupMode::Restore {
                    input: path,
                    map,
                    output: OutputTarget { path: output, copy },
                },
                quiet: self.quiet,
            });
        }

        let mode = if self.replace.is_empty() {
            if self.map_out.is_some() {
                return Err("--map-out requires at least one --replace".to_string());
            }
            if self.output.is_some() || self.copy {
                return Err("--output and --copy require at least one --replace".to_string());
            }
            StartupMode::Interactive { path: self.path }
        } else {
            if let Some(empty) = self.replace.iter().position(|r| r.is_empty()) {
                return Err(format!("--replace #{} is empty", empty + 1));
            }
            StartupMode::Batch {
                input: self.path,
                replacements: self.replace,
                map_out: self.map_out,
                output: OutputTarget {
                    path: self.output,
                    copy: self.copy,
                },
            }
        };

        Ok(StartupConfig {
            mode,
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StartupConfig, String> {
        let mut full = vec!["entity-replacer"];
        full.extend_from_slice(args);
        CliArgs::try_parse_from(full)
            .map_err(|e| e.to_string())?
            .into_config()
    }

    #[test]
    fn test_no_args_is_interactive_empty() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.mode, StartupMode::Interactive { path: None });
        assert!(!config.quiet);
    }

    #[test]
    fn test_file_is_interactive() {
        let config = parse(&["notes.txt", "--quiet"]).unwrap();
        assert_eq!(
            config.mode,
            StartupMode::Interactive {
                path: Some(PathBuf::from("notes.txt"))
            }
        );
        assert!(config.quiet);
    }

    #[test]
    fn test_replace_is_batch() {
        let config = parse(&["notes.txt", "-r", "cat", "--replace", "mat", "--map-out", "m.json"])
            .unwrap();
        match config.mode {
            StartupMode::Batch {
                input,
                replacements,
                map_out,
                output,
            } => {
                assert_eq!(input, Some(PathBuf::from("notes.txt")));
                assert_eq!(replacements, vec!["cat", "mat"]);
                assert_eq!(map_out, Some(PathBuf::from("m.json")));
                assert_eq!(output, OutputTarget::default());
            }
            other => panic!("Expected Batch mode, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_without_file_reads_stdin() {
        let config = parse(&["-r", "cat"]).unwrap();
        assert!(matches!(config.mode, StartupMode::Batch { input: None, .. }));
    }

    #[test]
    fn test_map_out_without_replace_is_error() {
        assert!(parse(&["notes.txt", "--map-out", "m.json"]).is_err());
        assert!(parse(&["notes.txt", "--copy"]).is_err());
    }

    #[test]
    fn test_empty_replace_is_error() {
        let err = parse(&["-r", "cat", "-r", ""]).unwrap_err();
        assert!(err.contains("#2"), "{err}");
    }

    #[test]
    fn test_restore_subcommand() {
        let config = parse(&["restore", "doc.txt", "--map", "m.json", "--copy"]).unwrap();
        assert_eq!(
            config.mode,
            StartupMode::Restore {
                input: Some(PathBuf::from("doc.txt")),
                map: PathBuf::from("m.json"),
                output: OutputTarget {
                    path: None,
                    copy: true
                },
            }
        );
    }

    #[test]
    fn test_restore_requires_map() {
        assert!(parse(&["restore", "doc.txt"]).is_err());
    }
}

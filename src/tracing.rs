//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=session=debug` - session state transitions only
//! - `RUST_LOG=entity_replacer::engine=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/entity-replacer/logs/entity-replacer.log`
//! with daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Session;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with document text on
/// stdout, and respects RUST_LOG (default `warn`).
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub counter: u64,
    pub entity_count: usize,
    pub char_len: usize,
    pub revision: u64,
    pub selection: Option<(usize, usize)>,
}

impl SessionSnapshot {
    pub fn from_session(session: &Session) -> Self {
        Self {
            counter: session.counter,
            entity_count: session.entities.len(),
            char_len: session.document.char_len(),
            revision: session.document.revision,
            selection: session.selection.as_ref().map(|s| (s.start, s.end)),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.counter != other.counter {
            changes.push(format!("counter: {} → {}", self.counter, other.counter));
        }
        if self.entity_count != other.entity_count {
            changes.push(format!(
                "entities: {} → {}",
                self.entity_count, other.entity_count
            ));
        }
        if self.revision != other.revision {
            changes.push(format!(
                "document: {} chars → {} chars (rev {})",
                self.char_len, other.char_len, other.revision
            ));
        }
        if self.selection != other.selection {
            let describe = |s: Option<(usize, usize)>| match s {
                Some((start, end)) => format!("{}..{}", start, end),
                None => "none".to_string(),
            };
            changes.push(format!(
                "selection: {} → {}",
                describe(self.selection),
                describe(other.selection)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn test_snapshot_no_change() {
        let session = Session::new(Document::with_text("abc"));
        let a = SessionSnapshot::from_session(&session);
        let b = SessionSnapshot::from_session(&session);
        assert_eq!(a.diff(&b), None);
    }

    #[test]
    fn test_snapshot_reports_replace() {
        let mut session = Session::new(Document::with_text("abc abc"));
        session.select(0, 3);
        let before = SessionSnapshot::from_session(&session);
        session.replace_selection().unwrap();
        let after = SessionSnapshot::from_session(&session);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("counter: 1 → 2"), "{diff}");
        assert!(diff.contains("entities: 0 → 1"), "{diff}");
        assert!(diff.contains("7 chars → 21 chars"), "{diff}");
        assert!(diff.contains("selection: 0..3 → none"), "{diff}");
    }
}

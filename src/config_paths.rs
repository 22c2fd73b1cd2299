//! Where entity-replacer keeps its files
//!
//! Everything lives in one per-user directory: the YAML config next to a
//! `logs/` folder holding the daily-rotated trace log. On Windows that
//! directory is under `%APPDATA%`, elsewhere under the XDG config home.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "entity-replacer";
const CONFIG_FILE_NAME: &str = "config.yaml";
const LOGS_DIR_NAME: &str = "logs";

/// Base name of the trace log; rotation appends `.YYYY-MM-DD`
pub const LOG_FILE_NAME: &str = "entity-replacer.log";

/// Per-user directory for config and logs
///
/// `$XDG_CONFIG_HOME/entity-replacer` when set, otherwise
/// `~/.config/entity-replacer`; `%APPDATA%\entity-replacer` on Windows.
/// `None` when no home directory can be determined.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// The shell settings read at startup
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Folder the rolling trace log is written to
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join(LOGS_DIR_NAME))
}

/// Log file the `log` command points the user at
///
/// This is today's rotated file when one exists, otherwise the base name
/// inside the logs folder.
pub fn log_file() -> Option<PathBuf> {
    let dir = logs_dir()?;
    Some(newest_log_in(&dir).unwrap_or_else(|| dir.join(LOG_FILE_NAME)))
}

/// Most recent rotated log in `dir`
///
/// Rotation suffixes are ISO dates, so the lexically greatest name is the
/// newest file.
fn newest_log_in(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_FILE_NAME))
        })
        .max()
}

/// Create the logs folder (and the config directory above it) if needed
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create log directory {}: {}", dir.display(), e))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_log_picks_latest_date() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "entity-replacer.log.2026-01-07",
            "entity-replacer.log.2026-03-01",
            "entity-replacer.log.2025-12-31",
            "unrelated.txt",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(
            newest_log_in(dir.path()),
            Some(dir.path().join("entity-replacer.log.2026-03-01"))
        );
    }

    #[test]
    fn test_newest_log_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(newest_log_in(dir.path()), None);
        assert_eq!(newest_log_in(&dir.path().join("missing")), None);
    }
}

//! Configuration persistence
//!
//! Stores user preferences in `~/.config/entity-replacer/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// How long the "Copied!" confirmation stays visible (milliseconds)
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Print the document after every change
    #[serde(default = "default_echo_document")]
    pub echo_document: bool,

    /// Prompt printed before each interactive command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Width of the status line in characters
    #[serde(default = "default_status_width")]
    pub status_width: usize,
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_echo_document() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_status_width() -> usize {
    80
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: default_copy_feedback_ms(),
            echo_document: default_echo_document(),
            prompt: default_prompt(),
            status_width: default_status_width(),
        }
    }
}

impl EntityConfig {
    /// Load the user config, creating it with defaults on first run
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_create(&path)
    }

    /// Load config from `path`, writing the defaults there first if the
    /// file does not exist yet so there is something to edit
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Could not write default config: {}", e);
        }
        config
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Copy confirmation lifetime
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

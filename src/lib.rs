//! Entity Replacer - Elm-style placeholder substitution
//!
//! This crate replaces selected text with numbered `[entity-N]` placeholders
//! and restores the originals later, following the Elm Architecture pattern:
//! the model is only changed by `update`, and side effects are described as
//! commands the runtime executes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod engine;
pub mod input;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EntityConfig;
pub use engine::{EngineError, EntityKey, EntityMap, SessionState};
pub use messages::Msg;
pub use model::AppModel;

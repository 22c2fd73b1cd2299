//! Runtime module - terminal and platform integration
//!
//! This module contains the code that drives the model from the outside:
//! - `app` - interactive line-oriented shell
//! - `batch` - one-shot replace and restore runs
//! - `clipboard` - system clipboard access

pub mod app;
pub mod batch;
pub mod clipboard;

pub use app::App;
pub use clipboard::{Clipboard, SystemClipboard};

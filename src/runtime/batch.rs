//! One-shot runs: replace a list of strings, or restore from a saved map

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::OutputTarget;
use crate::engine::{self, EntityMap, SessionState, FIRST_ENTITY};

use super::clipboard::Clipboard;

/// Result of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub state: SessionState,
    /// Occurrences replaced (or restored) per step
    pub counts: Vec<usize>,
}

/// Apply each replacement in order to `text`
///
/// Strings that no longer occur still get an entity, so entity numbers
/// always line up with the order of `replacements`.
pub fn replace_all(text: &str, replacements: &[String]) -> Result<BatchOutcome> {
    let mut state = SessionState::new(text);
    let mut counts = Vec::with_capacity(replacements.len());

    for selected in replacements {
        let (next, outcome) = engine::replace(&state, selected)
            .with_context(|| format!("Cannot replace {:?}", selected))?;
        if outcome.occurrences == 0 {
            tracing::warn!("{:?} does not occur in the document", selected);
        }
        tracing::info!(
            "{} replaced {} occurrence(s)",
            outcome.key,
            outcome.occurrences
        );
        counts.push(outcome.occurrences);
        state = next;
    }

    Ok(BatchOutcome { state, counts })
}

/// Restore `text` using a previously exported entity map
pub fn restore_with(text: &str, entities: EntityMap) -> BatchOutcome {
    let counter = entities
        .highest()
        .map(|key| key.number() + 1)
        .unwrap_or(FIRST_ENTITY);
    let state = SessionState {
        document: text.to_string(),
        entities,
        counter,
    };
    let (state, outcome) = engine::restore_all(&state);
    tracing::info!(
        "Restored {} placeholders from {} entities",
        outcome.restored,
        outcome.entities_cleared
    );
    BatchOutcome {
        state,
        counts: vec![outcome.restored],
    }
}

/// Read a document from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Load an entity map written by `--map-out` or `export`
pub fn read_entity_map(path: &Path) -> Result<EntityMap> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity map {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid entity map {}", path.display()))
}

/// Write an entity map as pretty JSON
pub fn write_entity_map(path: &Path, entities: &EntityMap) -> Result<()> {
    let json = serde_json::to_string_pretty(entities).context("Failed to serialize entities")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write entity map {}", path.display()))?;
    tracing::info!("Wrote {} entities to {}", entities.len(), path.display());
    Ok(())
}

/// Deliver a finished document to the requested destinations
pub fn emit<W: Write, C: Clipboard>(
    text: &str,
    target: &OutputTarget,
    stdout: &mut W,
    clipboard: &mut C,
) -> Result<()> {
    match &target.path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    if target.copy {
        // Non-fatal: the document has already been written
        if let Err(e) = clipboard.set_text(text) {
            tracing::warn!("Clipboard write failed: {}", e);
            eprintln!("Warning: could not copy to clipboard: {}", e);
        }
    }
    Ok(())
}

/// Full batch replace run
pub fn run_replace<W: Write, C: Clipboard>(
    input: Option<&Path>,
    replacements: &[String],
    map_out: Option<&Path>,
    target: &OutputTarget,
    stdout: &mut W,
    clipboard: &mut C,
) -> Result<BatchOutcome> {
    if replacements.is_empty() {
        bail!("Nothing to replace");
    }
    let text = read_input(input)?;
    let outcome = replace_all(&text, replacements)?;

    if let Some(path) = map_out {
        write_entity_map(path, &outcome.state.entities)?;
    }
    emit(&outcome.state.document, target, stdout, clipboard)?;
    Ok(outcome)
}

/// Full batch restore run
pub fn run_restore<W: Write, C: Clipboard>(
    input: Option<&Path>,
    map: &Path,
    target: &OutputTarget,
    stdout: &mut W,
    clipboard: &mut C,
) -> Result<BatchOutcome> {
    let entities = read_entity_map(map)?;
    let text = read_input(input)?;
    let outcome = restore_with(&text, entities);
    emit(&outcome.state.document, target, stdout, clipboard)?;
    Ok(outcome)
}

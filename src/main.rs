use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use entity_replacer::cli::{CliArgs, StartupMode};
use entity_replacer::config::EntityConfig;
use entity_replacer::model::{AppModel, Document};
use entity_replacer::runtime::{batch, App, SystemClipboard};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    entity_replacer::tracing::init();

    let mut config = EntityConfig::load();
    if startup.quiet {
        config.echo_document = false;
    }

    let mut stdout = std::io::stdout();
    let mut clipboard = SystemClipboard::new();

    match startup.mode {
        StartupMode::Interactive { path } => {
            let document = open_document(path)?;
            let mut app = App::new(AppModel::new(document, config), clipboard);
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            app.run(stdin.lock(), &mut stdout, interactive)?;
        }
        StartupMode::Batch {
            input,
            replacements,
            map_out,
            output,
        } => {
            batch::run_replace(
                input.as_deref(),
                &replacements,
                map_out.as_deref(),
                &output,
                &mut stdout,
                &mut clipboard,
            )?;
        }
        StartupMode::Restore { input, map, output } => {
            batch::run_restore(
                input.as_deref(),
                &map,
                &output,
                &mut stdout,
                &mut clipboard,
            )?;
        }
    }

    Ok(())
}

/// Load the startup document; a path that does not exist yet becomes an
/// empty document that saves to that path
fn open_document(path: Option<PathBuf>) -> Result<Document> {
    let Some(path) = path else {
        return Ok(Document::new());
    };
    if !path.exists() {
        tracing::info!("{} does not exist, starting empty", path.display());
        let mut document = Document::new();
        document.file_path = Some(path);
        return Ok(document);
    }
    Document::from_file(path.clone()).with_context(|| format!("Failed to open {}", path.display()))
}

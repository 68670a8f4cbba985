//! hanzipad: type pinyin, pick characters, write the result to a file.
//!
//! Usage: `hanzipad <OUTPUT> [TRADITIONAL]`
//!
//! Keys (defaults, configurable): letters build the pinyin, Tab moves to the
//! next candidate, Enter commits it, Backspace clears the pinyin, `Q` quits
//! and writes the file.

mod terminal;
mod trace_init;

use anyhow::{Context, Result};
use clap::Parser;
use hanzipad_core::{run, CompositionSession, Config, DictionaryStore, DisplayMode};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use terminal::TerminalFrontend;

#[derive(Parser)]
#[command(name = "hanzipad", version, about = "Compose Chinese characters from pinyin and write them to a file")]
struct Args {
    /// File the composed text is written to
    output: PathBuf,

    /// Any value here switches to traditional characters
    traditional: Option<String>,

    /// Dictionary to load (text, or a .bincode cache)
    #[arg(long)]
    dict: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with HANZIPAD_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log) = &args.log {
        trace_init::init_tracing(log)?;
    }

    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if args.traditional.is_some() {
        config.display_mode = DisplayMode::Traditional;
    }
    if let Some(dict) = args.dict {
        config.dictionary = dict;
    }
    let keymap = config.keys.keymap()?;

    let store = DictionaryStore::open(&config.dictionary, &config.limits)
        .with_context(|| format!("failed to load dictionary {}", config.dictionary.display()))?;
    println!("Found {} entries.", store.len());

    // Create the output before the UI starts so an unwritable path fails early.
    let mut output = File::create(&args.output)
        .with_context(|| format!("cannot open output file {}", args.output.display()))?;

    let session = CompositionSession::new(Arc::new(store), config.display_mode);
    let text = {
        let mut frontend = TerminalFrontend::enter(keymap).context("cannot set up terminal")?;
        run(session, &mut frontend)?
    };

    output
        .write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), bytes = text.len(), "wrote output");
    Ok(())
}

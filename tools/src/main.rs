mod convert_table;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hanzipad_core::{DisplayMode, FieldLimits};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hanzipad-tools", about = "Offline utilities for hanzipad dictionaries")]
struct Args {
    /// Byte capacity of the phonetic key column
    #[arg(long, global = true)]
    key_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count entries and distinct phonetic keys
    Stats { dict: PathBuf },

    /// List the candidates a prefix produces, in order
    Lookup {
        dict: PathBuf,
        prefix: String,
        #[arg(long)]
        traditional: bool,
        #[arg(long)]
        json: bool,
    },

    /// Compile a text dictionary into a bincode cache
    Convert { input: PathBuf, output: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut limits = FieldLimits::default();
    if let Some(max) = args.key_limit {
        limits.phonetic_key = max;
    }

    match args.command {
        Command::Stats { dict } => inspect::stats(&dict, &limits)?,
        Command::Lookup {
            dict,
            prefix,
            traditional,
            json,
        } => {
            let mode = if traditional {
                DisplayMode::Traditional
            } else {
                DisplayMode::Simplified
            };
            inspect::lookup(&dict, &prefix, mode, json, &limits)?;
        }
        Command::Convert { input, output } => {
            let n = convert_table::run(&input, &output, &limits)?;
            println!("Wrote {} entries to {}", n, output.display());
        }
    }
    Ok(())
}

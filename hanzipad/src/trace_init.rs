use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hanzipad=info,hanzipad_core=info";

/// Send tracing output to `log_path`. The terminal is in raw mode while the
/// session runs, so logs never go to stdout or stderr.
pub fn init_tracing(log_path: &Path) -> Result<()> {
    let file = File::create(log_path)
        .with_context(|| format!("cannot create log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_env("HANZIPAD_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
    Ok(())
}

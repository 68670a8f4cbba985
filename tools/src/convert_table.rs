use anyhow::{Context, Result};
use hanzipad_core::{DictionaryStore, FieldLimits};
use std::path::Path;

/// Parse a text dictionary and write it as a bincode cache.
/// Returns the number of entries written.
pub fn run(input: &Path, output: &Path, limits: &FieldLimits) -> Result<usize> {
    let store = DictionaryStore::load(input, limits)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    store
        .save_bincode(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(store.len())
}

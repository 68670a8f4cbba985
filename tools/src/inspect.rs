use anyhow::{Context, Result};
use hanzipad_core::{find_matches, DictionaryStore, DisplayMode, FieldLimits};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// One lookup result line.
#[derive(Debug, Serialize, PartialEq)]
struct MatchRow<'a> {
    index: usize,
    form: &'a str,
    phonetic_key: &'a str,
    gloss: &'a str,
}

fn open(dict: &Path, limits: &FieldLimits) -> Result<DictionaryStore> {
    DictionaryStore::open(dict, limits).with_context(|| format!("failed to load {}", dict.display()))
}

fn match_rows<'a>(store: &'a DictionaryStore, prefix: &'a str, mode: DisplayMode) -> Vec<MatchRow<'a>> {
    find_matches(store, prefix)
        .enumerate()
        .map(|(index, e)| MatchRow {
            index,
            form: e.form(mode),
            phonetic_key: e.phonetic_key(),
            gloss: e.gloss(),
        })
        .collect()
}

fn distinct_keys(store: &DictionaryStore) -> usize {
    store
        .entries()
        .iter()
        .map(|e| e.phonetic_key())
        .collect::<HashSet<_>>()
        .len()
}

pub fn stats(dict: &Path, limits: &FieldLimits) -> Result<()> {
    let store = open(dict, limits)?;
    println!("Entries: {}", store.len());
    println!("Distinct phonetic keys: {}", distinct_keys(&store));
    Ok(())
}

pub fn lookup(dict: &Path, prefix: &str, mode: DisplayMode, json: bool, limits: &FieldLimits) -> Result<()> {
    let store = open(dict, limits)?;
    let rows = match_rows(&store, prefix, mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("Prefix '{}' has no candidates", prefix);
        return Ok(());
    }
    println!("Found {} candidates:", rows.len());
    for row in &rows {
        println!("  {}. {} {} {}", row.index, row.form, row.phonetic_key, row.gloss);
    }
    Ok(())
}

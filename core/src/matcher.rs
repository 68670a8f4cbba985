//! Prefix matching of phonetic input against the dictionary.
//!
//! Every stored phonetic key starts with a reserved byte (the `[` of
//! `[ni3]`) that takes no part in matching. An entry matches when the typed
//! prefix equals the key characters that follow it, compared exactly: no
//! case folding and no tone stripping.
//!
//! Matches are always produced in dictionary order, so "the nth candidate"
//! means the same thing to rendering and to committing.

use crate::dictionary::{DictionaryEntry, DictionaryStore};
use serde::{Deserialize, Serialize};
use std::slice;

/// Which character form candidates are shown and committed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Simplified,
    Traditional,
}

/// Test a single stored key against a typed prefix.
///
/// An empty prefix never matches.
pub fn key_matches(phonetic_key: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    let mut key = phonetic_key.chars();
    // Reserved leading byte.
    if key.next().is_none() {
        return false;
    }
    let mut typed = prefix.chars();
    loop {
        match (typed.next(), key.next()) {
            (None, _) => return true,
            (Some(a), Some(b)) if a == b => continue,
            _ => return false,
        }
    }
}

/// Lazy iterator over the entries matching a prefix, in dictionary order.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    entries: slice::Iter<'a, DictionaryEntry>,
    prefix: &'a str,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a DictionaryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.prefix.is_empty() {
            return None;
        }
        let prefix = self.prefix;
        self.entries.by_ref().find(|e| key_matches(e.phonetic_key(), prefix))
    }
}

/// Enumerate the entries of `store` whose key matches `prefix`.
pub fn find_matches<'a>(store: &'a DictionaryStore, prefix: &'a str) -> Matches<'a> {
    Matches {
        entries: store.entries().iter(),
        prefix,
    }
}

pub fn count_matches(store: &DictionaryStore, prefix: &str) -> usize {
    find_matches(store, prefix).count()
}

/// The `n`th (0-based) matching entry, or `None` if there are fewer matches.
pub fn nth_entry<'a>(store: &'a DictionaryStore, prefix: &'a str, n: usize) -> Option<&'a DictionaryEntry> {
    find_matches(store, prefix).nth(n)
}

/// Display form of the `n`th match in the given mode.
pub fn nth<'a>(store: &'a DictionaryStore, prefix: &'a str, n: usize, mode: DisplayMode) -> Option<&'a str> {
    nth_entry(store, prefix, n).map(|e| e.form(mode))
}

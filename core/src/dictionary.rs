//! Character dictionary for hanzipad.
//!
//! The dictionary is a fixed, ordered table of records loaded once at startup:
//!
//! ```text
//! 你 你 [ni3] /you (informal, as opposed to courteous 您[nin2])/
//! 好 好 [hao3] /good/well/proper/
//! ```
//!
//! Each line holds three whitespace-delimited tokens (traditional form,
//! simplified form, phonetic key) followed by the gloss, which runs to the end
//! of the line and may contain spaces. File order is significant: it is the
//! order candidates are offered in.
//!
//! Public API:
//! - `DictionaryEntry` — one immutable record
//! - `DictionaryStore` — the ordered table, text and bincode loaders
//! - `FieldLimits` — per-field byte capacities enforced at parse time

use crate::error::{DictionaryError, Field, FormatErrorKind};
use crate::matcher::DisplayMode;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;

/// A single dictionary record.
///
/// All four fields are always present; the gloss may be empty. Entries are
/// never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    traditional: String,
    simplified: String,
    phonetic_key: String,
    gloss: String,
}

impl DictionaryEntry {
    pub fn new<T, S, K, G>(traditional: T, simplified: S, phonetic_key: K, gloss: G) -> Self
    where
        T: Into<String>,
        S: Into<String>,
        K: Into<String>,
        G: Into<String>,
    {
        Self {
            traditional: traditional.into(),
            simplified: simplified.into(),
            phonetic_key: phonetic_key.into(),
            gloss: gloss.into(),
        }
    }

    pub fn traditional(&self) -> &str {
        &self.traditional
    }

    pub fn simplified(&self) -> &str {
        &self.simplified
    }

    /// The stored key, including its reserved leading byte (e.g. `[ni3]`).
    pub fn phonetic_key(&self) -> &str {
        &self.phonetic_key
    }

    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    /// The character form shown and committed in the given display mode.
    pub fn form(&self, mode: DisplayMode) -> &str {
        match mode {
            DisplayMode::Simplified => &self.simplified,
            DisplayMode::Traditional => &self.traditional,
        }
    }
}

/// Byte capacities for each record field.
///
/// The defaults are the fixed widths of the record schema: eight-byte form
/// and key fields and a 4096-byte gloss, each minus its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    /// Capacity of the traditional and simplified forms.
    pub form: usize,
    pub phonetic_key: usize,
    pub gloss: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            form: 7,
            phonetic_key: 7,
            gloss: 4095,
        }
    }
}

impl FieldLimits {
    fn max_for(&self, field: Field) -> usize {
        match field {
            Field::Traditional | Field::Simplified => self.form,
            Field::PhoneticKey => self.phonetic_key,
            Field::Gloss => self.gloss,
        }
    }
}

/// Ordered, read-only table of dictionary entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryStore {
    entries: Vec<DictionaryEntry>,
}

impl DictionaryStore {
    /// Create an empty store. Every prefix lookup against it misses.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a store from entries already in lookup order.
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }

    /// Load a text dictionary from `path`.
    pub fn load<P: AsRef<Path>>(path: P, limits: &FieldLimits) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let store = Self::from_reader(BufReader::new(file), limits).map_err(|e| match e {
            DictionaryError::Read(source) => io_err(source),
            other => other,
        })?;
        tracing::info!(path = %path.display(), entries = store.len(), "loaded dictionary");
        Ok(store)
    }

    /// Open either a text dictionary or a compiled `.bin`/`.bincode` cache,
    /// chosen by file extension.
    pub fn open<P: AsRef<Path>>(path: P, limits: &FieldLimits) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("bin") | Some("bincode") => Self::load_bincode(path),
            _ => Self::load(path, limits),
        }
    }

    /// Parse text records from any buffered reader in a single pass.
    ///
    /// Blank lines are skipped. The last record is kept even without a
    /// trailing newline. Bytes that are not valid UTF-8 are replaced rather
    /// than rejected.
    pub fn from_reader<R: BufRead>(mut reader: R, limits: &FieldLimits) -> Result<Self, DictionaryError> {
        let mut entries = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let decoded = String::from_utf8_lossy(&buf);
            let text: &str = &decoded;
            let line = text.strip_suffix('\n').unwrap_or(text);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                tracing::debug!(line = line_no, "skipping blank dictionary line");
                continue;
            }

            let entry = parse_record(line, limits)
                .map_err(|kind| DictionaryError::Format { line: line_no, kind })?;
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Save the store to a file using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Load a store from a bincode file produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store: Self = bincode::deserialize_from(BufReader::new(file))?;
        tracing::info!(path = %path.display(), entries = store.len(), "loaded dictionary cache");
        Ok(store)
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DictionaryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split the next whitespace-delimited token off the front of `rest`.
fn next_token<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let s = rest.trim_start();
    if s.is_empty() {
        *rest = s;
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    let (token, tail) = s.split_at(end);
    *rest = tail;
    Some(token)
}

fn checked<'a>(value: &'a str, field: Field, limits: &FieldLimits) -> Result<&'a str, FormatErrorKind> {
    let max = limits.max_for(field);
    if value.len() > max {
        return Err(FormatErrorKind::FieldTooLong {
            field,
            len: value.len(),
            max,
        });
    }
    Ok(value)
}

fn parse_record(line: &str, limits: &FieldLimits) -> Result<DictionaryEntry, FormatErrorKind> {
    let mut rest = line;
    let mut token = |field: Field| {
        next_token(&mut rest)
            .ok_or(FormatErrorKind::MissingField(field))
            .and_then(|t| checked(t, field, limits))
    };

    let traditional = token(Field::Traditional)?;
    let simplified = token(Field::Simplified)?;
    let phonetic_key = token(Field::PhoneticKey)?;

    // Everything after the key's separating whitespace is the gloss.
    let gloss = checked(rest.trim_start(), Field::Gloss, limits)?;

    Ok(DictionaryEntry::new(traditional, simplified, phonetic_key, gloss))
}

//! Error types for dictionary loading, configuration and the session loop.
//!
//! Only startup can fail in a way the user sees: a dictionary that cannot be
//! read or parsed, or a configuration file that does not deserialize.
//! In-session conditions (a candidate index with no match, an overflowing
//! phonetic buffer) are ordinary state transitions and never surface here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// One of the four columns of a dictionary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Traditional,
    Simplified,
    PhoneticKey,
    Gloss,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Traditional => "traditional form",
            Field::Simplified => "simplified form",
            Field::PhoneticKey => "phonetic key",
            Field::Gloss => "gloss",
        };
        f.write_str(name)
    }
}

/// Why a dictionary record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    /// The line ended before this token was found.
    #[error("missing {0}")]
    MissingField(Field),

    /// The field does not fit its fixed capacity.
    #[error("{field} is {len} bytes, capacity is {max}")]
    FieldTooLong { field: Field, len: usize, max: usize },
}

/// Failure to build a `DictionaryStore`.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("cannot read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a source with no path attached failed.
    #[error("cannot read dictionary: {0}")]
    Read(#[from] io::Error),

    /// A record could not be parsed. `line` is 1-based.
    #[error("dictionary record on line {line}: {kind}")]
    Format { line: usize, kind: FormatErrorKind },

    /// The compiled bincode cache could not be (de)serialized.
    #[error("dictionary cache: {0}")]
    Cache(#[from] bincode::Error),
}

impl DictionaryError {
    /// Line number of the offending record, for format errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            DictionaryError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A key binding names a key we cannot bind.
    #[error("unknown key name `{0}`")]
    UnknownKey(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The frontend failed to draw or to read the next key.
    #[error("frontend: {0}")]
    Frontend(#[from] io::Error),
}

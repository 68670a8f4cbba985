//! hanzipad-core
//!
//! Dictionary, prefix matching and composition state for hanzipad, a small
//! tool that composes a string of Chinese characters from typed pinyin and
//! writes it to a file.
//!
//! Public API:
//! - `DictionaryStore` - Ordered phonetic key → character → gloss table
//! - `find_matches` / `nth` - Prefix lookup in dictionary order
//! - `CompositionSession` - Committed text, phonetic buffer, candidate cursor
//! - `Frontend` / `run` - The render → read key → apply loop
//! - `Config` - Display mode, dictionary path, field limits, key bindings
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod error;
pub use error::{ConfigError, DictionaryError, Field, FormatErrorKind, SessionError};

pub mod dictionary;
pub use dictionary::{DictionaryEntry, DictionaryStore, FieldLimits};

pub mod matcher;
pub use matcher::{count_matches, find_matches, key_matches, nth, nth_entry, DisplayMode, Matches};

pub mod input_buffer;
pub use input_buffer::{PhoneticBuffer, PushOutcome, PHONETIC_CAPACITY};

pub mod candidate;
pub use candidate::{CandidateCursor, CandidateView};

pub mod context;
pub use context::RenderFrame;

pub mod session;
pub use session::CompositionSession;

pub mod engine;
pub use engine::{run, Frontend, KeyEvent, KeyResult, ScriptedFrontend};

/// Dictionary file used when neither the command line nor the config names one.
pub const DEFAULT_DICTIONARY: &str = "single_char.txt";

/// Configuration for a hanzipad session.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Show and commit simplified or traditional forms.
    pub display_mode: DisplayMode,

    /// Path of the text dictionary or compiled `.bincode` cache.
    pub dictionary: PathBuf,

    /// Byte capacities checked when loading the dictionary.
    pub limits: FieldLimits,

    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Simplified,
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            limits: FieldLimits::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        // Surface bad key names at load time rather than on first key press.
        config.keys.keymap()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// A physical key as reported by a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKey {
    Tab,
    Enter,
    Backspace,
    Esc,
    Char(char),
}

impl BoundKey {
    /// Parse a key name: `tab`, `enter`, `backspace`, `esc`, or a single character.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "tab" => return Ok(BoundKey::Tab),
            "enter" | "return" => return Ok(BoundKey::Enter),
            "backspace" => return Ok(BoundKey::Backspace),
            "esc" | "escape" => return Ok(BoundKey::Esc),
            _ => {}
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(BoundKey::Char(c)),
            _ => Err(ConfigError::UnknownKey(name.to_string())),
        }
    }
}

/// Key names for the session's non-character events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub next_candidate: String,
    pub commit: String,
    pub erase: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            next_candidate: "tab".into(),
            commit: "enter".into(),
            erase: "backspace".into(),
            quit: "Q".into(),
        }
    }
}

impl KeyBindings {
    /// Resolve key names into a `KeyMap`.
    pub fn keymap(&self) -> Result<KeyMap, ConfigError> {
        Ok(KeyMap {
            next_candidate: BoundKey::parse(&self.next_candidate)?,
            commit: BoundKey::parse(&self.commit)?,
            erase: BoundKey::parse(&self.erase)?,
            quit: BoundKey::parse(&self.quit)?,
        })
    }
}

/// Resolved key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub next_candidate: BoundKey,
    pub commit: BoundKey,
    pub erase: BoundKey,
    pub quit: BoundKey,
}

impl KeyMap {
    /// Turn a physical key into a session event.
    ///
    /// Bound keys win over character input, so a bound printable key (the
    /// default quit key `Q`) never reaches the phonetic buffer. Unbound
    /// non-printable keys are ignored.
    pub fn classify(&self, key: BoundKey) -> Option<KeyEvent> {
        if key == self.quit {
            Some(KeyEvent::Quit)
        } else if key == self.commit {
            Some(KeyEvent::Commit)
        } else if key == self.next_candidate {
            Some(KeyEvent::NextCandidate)
        } else if key == self.erase {
            Some(KeyEvent::Erase)
        } else {
            match key {
                BoundKey::Char(c) if !c.is_control() => Some(KeyEvent::Char(c)),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrips_through_toml() {
        let cfg = Config::default();
        let text = cfg.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = Config::from_toml_str(
            r#"
display_mode = "traditional"

[limits]
phonetic_key = 15
"#,
        )
        .unwrap();
        assert_eq!(cfg.display_mode, DisplayMode::Traditional);
        assert_eq!(cfg.limits.phonetic_key, 15);
        assert_eq!(cfg.limits.form, 7);
        assert_eq!(cfg.dictionary, PathBuf::from(DEFAULT_DICTIONARY));
        assert_eq!(cfg.keys, KeyBindings::default());
    }

    #[test]
    fn default_keymap() {
        let map = KeyBindings::default().keymap().unwrap();
        assert_eq!(map.classify(BoundKey::Tab), Some(KeyEvent::NextCandidate));
        assert_eq!(map.classify(BoundKey::Enter), Some(KeyEvent::Commit));
        assert_eq!(map.classify(BoundKey::Backspace), Some(KeyEvent::Erase));
        assert_eq!(map.classify(BoundKey::Char('Q')), Some(KeyEvent::Quit));
        assert_eq!(map.classify(BoundKey::Char('q')), Some(KeyEvent::Char('q')));
        assert_eq!(map.classify(BoundKey::Esc), None);
    }

    #[test]
    fn custom_bindings() {
        let keys = KeyBindings {
            next_candidate: " ".into(),
            quit: "esc".into(),
            ..KeyBindings::default()
        };
        let map = keys.keymap().unwrap();
        assert_eq!(map.classify(BoundKey::Char(' ')), Some(KeyEvent::NextCandidate));
        assert_eq!(map.classify(BoundKey::Esc), Some(KeyEvent::Quit));
        assert_eq!(map.classify(BoundKey::Char('Q')), Some(KeyEvent::Char('Q')));
        assert_eq!(map.classify(BoundKey::Tab), None);
    }

    #[test]
    fn unknown_key_name_is_rejected() {
        let err = BoundKey::parse("f13").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(name) if name == "f13"));
    }

    #[test]
    fn load_toml_checks_key_names() {
        let tmp = std::env::temp_dir().join(format!("hanzipad_config_test_{}.toml", std::process::id()));
        std::fs::write(&tmp, "[keys]\ncommit = \"nope\"\n").unwrap();
        assert!(matches!(Config::load_toml(&tmp), Err(ConfigError::UnknownKey(_))));
        let _ = std::fs::remove_file(tmp);
    }
}

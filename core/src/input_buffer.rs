//! Bounded buffer for the in-progress phonetic spelling.
//!
//! The buffer holds at most `PHONETIC_CAPACITY` characters. There is no
//! cursor and no per-character deletion: input is only ever appended, and
//! the buffer is emptied as a whole (erase, commit, or overflow).

/// Maximum number of characters in a phonetic spelling.
pub const PHONETIC_CAPACITY: usize = 7;

/// What happened to a character offered to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The character was appended.
    Appended,
    /// The buffer was full; it has been emptied and the character dropped.
    Overflowed,
}

/// Phonetic input tracking, bounded to `PHONETIC_CAPACITY` chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneticBuffer {
    text: String,
    len: usize, // chars, not bytes
}

impl PhoneticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The spelling typed so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= PHONETIC_CAPACITY
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    /// Append a character, or empty the buffer if it is already full.
    pub fn push(&mut self, ch: char) -> PushOutcome {
        if self.is_full() {
            self.clear();
            return PushOutcome::Overflowed;
        }
        self.text.push(ch);
        self.len += 1;
        PushOutcome::Appended
    }
}

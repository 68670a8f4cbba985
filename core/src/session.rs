//! Composition session management.
//!
//! The `CompositionSession` owns the state of one interactive composition:
//! the committed text (append-only), the phonetic buffer, and the candidate
//! cursor. It consumes `KeyEvent`s and produces `RenderFrame`s; it never
//! draws or reads keys itself.

use crate::candidate::{CandidateCursor, CandidateView};
use crate::context::RenderFrame;
use crate::dictionary::DictionaryStore;
use crate::engine::{KeyEvent, KeyResult};
use crate::input_buffer::{PhoneticBuffer, PushOutcome};
use crate::matcher::{self, DisplayMode};
use std::sync::Arc;

/// State of one composition, from startup until quit.
#[derive(Debug, Clone)]
pub struct CompositionSession {
    store: Arc<DictionaryStore>,

    /// Fixed for the session's lifetime.
    display_mode: DisplayMode,

    committed_text: String,

    phonetic: PhoneticBuffer,

    cursor: CandidateCursor,
}

impl CompositionSession {
    pub fn new(store: Arc<DictionaryStore>, display_mode: DisplayMode) -> Self {
        Self {
            store,
            display_mode,
            committed_text: String::new(),
            phonetic: PhoneticBuffer::new(),
            cursor: CandidateCursor::first(),
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn committed_text(&self) -> &str {
        &self.committed_text
    }

    pub fn phonetic(&self) -> &PhoneticBuffer {
        &self.phonetic
    }

    pub fn cursor(&self) -> CandidateCursor {
        self.cursor
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Empty the phonetic buffer and put the cursor back on the first candidate.
    fn reset_composition(&mut self) {
        self.phonetic.clear();
        self.cursor.reset();
    }

    /// Apply one key event.
    ///
    /// Nothing here reports an error: an overflowing buffer resets itself and
    /// a commit with no matching candidate commits nothing.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        match key {
            KeyEvent::Char(ch) => {
                let was_empty = self.phonetic.is_empty();
                match self.phonetic.push(ch) {
                    PushOutcome::Appended if was_empty => self.cursor.reset(),
                    PushOutcome::Appended => {}
                    PushOutcome::Overflowed => {
                        tracing::debug!("phonetic buffer overflow, starting over");
                        self.cursor.reset();
                    }
                }
                KeyResult::Continue
            }
            KeyEvent::NextCandidate => {
                self.cursor.advance();
                KeyResult::Continue
            }
            KeyEvent::Commit => self.commit(),
            KeyEvent::Erase => {
                self.reset_composition();
                KeyResult::Continue
            }
            KeyEvent::Quit => KeyResult::Quit,
        }
    }

    /// Commit the highlighted candidate.
    ///
    /// With no selection this is a no-op. Otherwise the buffer and cursor
    /// are reset whether or not the lookup found a candidate.
    fn commit(&mut self) -> KeyResult {
        let Some(index) = self.cursor.index() else {
            return KeyResult::Continue;
        };

        let form = matcher::nth(&self.store, self.phonetic.text(), index, self.display_mode)
            .map(str::to_owned);
        self.reset_composition();

        match form {
            Some(form) => {
                tracing::debug!(%form, index, "committed candidate");
                self.committed_text.push_str(&form);
                KeyResult::Committed(form)
            }
            None => {
                tracing::debug!(index, "no candidate to commit");
                KeyResult::Continue
            }
        }
    }

    /// Compute what to draw, clamping the cursor if it has run past the
    /// current matches.
    pub fn render(&mut self) -> RenderFrame {
        let prefix = self.phonetic.text();
        let num_matches = matcher::count_matches(&self.store, prefix);
        self.cursor.clamp(num_matches);

        let selected = self.cursor.index();
        let mut gloss = None;
        let candidates = matcher::find_matches(&self.store, prefix)
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = selected == Some(i);
                if is_selected {
                    gloss = Some(entry.gloss().to_owned());
                }
                CandidateView::new(entry.form(self.display_mode), is_selected)
            })
            .collect();

        RenderFrame {
            committed_text: self.committed_text.clone(),
            phonetic: prefix.to_owned(),
            candidates,
            gloss,
        }
    }

    /// End the session, yielding the composed text.
    pub fn finish(self) -> String {
        self.committed_text
    }
}

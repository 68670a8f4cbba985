//! Key events and the interactive loop.
//!
//! The loop is single-threaded and pull-based: render, draw, block on the
//! next key, apply it, repeat until quit. The `Frontend` trait is the seam
//! to whatever actually draws and reads keys (a terminal, or a script in
//! tests).

use crate::context::RenderFrame;
use crate::error::SessionError;
use crate::session::CompositionSession;
use std::collections::VecDeque;
use std::io;

/// Key event categories the session understands.
///
/// Which physical keys produce these is decided by the frontend (see
/// `KeyBindings`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Printable character for the phonetic buffer
    Char(char),
    /// Highlight the next candidate
    NextCandidate,
    /// Commit the highlighted candidate
    Commit,
    /// Discard the phonetic buffer
    Erase,
    /// End the session
    Quit,
}

/// Result of processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
    /// State may have changed; keep going.
    Continue,
    /// This form was appended to the committed text.
    Committed(String),
    /// The session is over.
    Quit,
}

/// Display/input backend driven by `run`.
pub trait Frontend {
    /// Draw one render step.
    fn draw(&mut self, frame: &RenderFrame) -> io::Result<()>;

    /// Block until the next key event. `Ok(None)` means input has ended
    /// and is treated like a quit.
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Drive `session` with `frontend` until quit, returning the committed text.
pub fn run<F: Frontend + ?Sized>(
    mut session: CompositionSession,
    frontend: &mut F,
) -> Result<String, SessionError> {
    loop {
        let frame = session.render();
        frontend.draw(&frame)?;

        let Some(key) = frontend.read_key()? else {
            tracing::debug!("input ended");
            break;
        };
        if session.process_key(key) == KeyResult::Quit {
            break;
        }
    }

    let text = session.finish();
    tracing::info!(chars = text.chars().count(), "session finished");
    Ok(text)
}

/// Frontend that replays a fixed key sequence and records every frame.
///
/// Used by tests and by tools that want to run a session non-interactively.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    keys: VecDeque<KeyEvent>,
    frames: Vec<RenderFrame>,
}

impl ScriptedFrontend {
    pub fn new<I: IntoIterator<Item = KeyEvent>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    /// Script typing each character of `text`.
    pub fn typing(text: &str) -> Self {
        Self::new(text.chars().map(KeyEvent::Char))
    }

    /// Append more keys to the script.
    pub fn then<I: IntoIterator<Item = KeyEvent>>(mut self, keys: I) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Frames drawn so far, oldest first.
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }
}

impl Frontend for ScriptedFrontend {
    fn draw(&mut self, frame: &RenderFrame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryEntry, DictionaryStore};
    use crate::matcher::DisplayMode;
    use std::sync::Arc;

    fn session() -> CompositionSession {
        let store = DictionaryStore::from_entries(vec![DictionaryEntry::new("你", "你", "[ni3]", "/you/")]);
        CompositionSession::new(Arc::new(store), DisplayMode::Simplified)
    }

    struct FailingFrontend;

    impl Frontend for FailingFrontend {
        fn draw(&mut self, _frame: &RenderFrame) -> io::Result<()> {
            Ok(())
        }

        fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn draws_once_per_key_until_quit() {
        let mut frontend = ScriptedFrontend::typing("ni").then([KeyEvent::Commit, KeyEvent::Quit, KeyEvent::Char('x')]);
        let text = run(session(), &mut frontend).unwrap();
        assert_eq!(text, "你");
        // Initial frame plus one per key before quit.
        assert_eq!(frontend.frames().len(), 4);
        assert_eq!(frontend.last_frame().unwrap().committed_text, "你");
    }

    #[test]
    fn end_of_input_acts_as_quit() {
        let mut frontend = ScriptedFrontend::typing("n");
        let text = run(session(), &mut frontend).unwrap();
        assert_eq!(text, "");
        assert_eq!(frontend.last_frame().unwrap().phonetic, "n");
    }

    #[test]
    fn frontend_errors_propagate() {
        let err = run(session(), &mut FailingFrontend).unwrap_err();
        assert!(matches!(err, SessionError::Frontend(_)));
    }
}

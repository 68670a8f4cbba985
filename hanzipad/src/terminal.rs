//! Raw-mode terminal frontend built on crossterm.
//!
//! Screen layout, top-left to bottom-right: committed text, the phonetic
//! buffer, the candidates (highlighted one in green, the rest in red), then
//! the gloss of the highlighted candidate.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use hanzipad_core::{BoundKey, Frontend, KeyEvent, KeyMap, RenderFrame};
use std::io::{self, Stdout, Write};

const SELECTED: Color = Color::Green;
const UNSELECTED: Color = Color::Red;

/// Terminal frontend. Raw mode and the alternate screen are active for the
/// lifetime of the value and restored on drop.
pub struct TerminalFrontend {
    out: Stdout,
    keymap: KeyMap,
}

impl TerminalFrontend {
    pub fn enter(keymap: KeyMap) -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out, keymap })
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Frontend for TerminalFrontend {
    fn draw(&mut self, frame: &RenderFrame) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::All),
            Print(&frame.committed_text),
            Print(&frame.phonetic)
        )?;
        for candidate in &frame.candidates {
            let color = if candidate.selected { SELECTED } else { UNSELECTED };
            queue!(self.out, SetForegroundColor(color), Print(&candidate.text), ResetColor)?;
        }
        if let Some(gloss) = &frame.gloss {
            queue!(self.out, Print(gloss))?;
        }
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(ev) = translate(key.code, key.modifiers, &self.keymap) {
                    return Ok(Some(ev));
                }
            }
        }
    }
}

/// Map a crossterm key to a session event. Ctrl-C always quits, since raw
/// mode swallows the interrupt signal.
pub fn translate(code: KeyCode, modifiers: KeyModifiers, keymap: &KeyMap) -> Option<KeyEvent> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(KeyEvent::Quit),
            _ => None,
        };
    }
    let key = match code {
        KeyCode::Tab => BoundKey::Tab,
        KeyCode::Enter => BoundKey::Enter,
        KeyCode::Backspace => BoundKey::Backspace,
        KeyCode::Esc => BoundKey::Esc,
        KeyCode::Char(c) => BoundKey::Char(c),
        _ => return None,
    };
    keymap.classify(key)
}

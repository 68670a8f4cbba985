//! Candidate selection state.
//!
//! This module provides:
//! - `CandidateCursor`: which match is highlighted, or none
//! - `CandidateView`: one candidate as handed to the frontend

use serde::{Deserialize, Serialize};

/// Index of the highlighted candidate among the current matches.
///
/// `None` means nothing is selected. Advancing from `None` selects the
/// first candidate again, so repeated "next" presses cycle through the list
/// with one unselected step after the last candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateCursor(Option<usize>);

impl CandidateCursor {
    /// Cursor on the first candidate.
    pub fn first() -> Self {
        Self(Some(0))
    }

    /// Cursor with nothing selected.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn index(&self) -> Option<usize> {
        self.0
    }

    pub fn is_selected(&self) -> bool {
        self.0.is_some()
    }

    /// Move to the next candidate.
    pub fn advance(&mut self) {
        self.0 = Some(self.0.map_or(0, |i| i.saturating_add(1)));
    }

    /// Drop the selection if it points at or past `num_matches`.
    /// Returns true if the cursor changed.
    pub fn clamp(&mut self, num_matches: usize) -> bool {
        match self.0 {
            Some(i) if i >= num_matches => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.0 = Some(0);
    }
}

/// A candidate as drawn by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateView {
    /// Character form in the session's display mode.
    pub text: String,
    pub selected: bool,
}

impl CandidateView {
    pub fn new<T: Into<String>>(text: T, selected: bool) -> Self {
        Self {
            text: text.into(),
            selected,
        }
    }
}

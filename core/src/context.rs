//! Render output for frontend communication.
//!
//! `RenderFrame` is a plain data container: after each render step the
//! frontend reads these fields and decides how to draw them. The core only
//! decides what is shown and which candidate is highlighted.

use crate::candidate::CandidateView;
use serde::{Deserialize, Serialize};

/// Everything the frontend needs to draw one screen.
///
/// Drawing order is committed text, phonetic buffer, candidates, gloss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Text committed so far, verbatim.
    pub committed_text: String,

    /// The literal phonetic buffer.
    pub phonetic: String,

    /// Current matches in dictionary order.
    pub candidates: Vec<CandidateView>,

    /// Gloss of the selected candidate, if one is selected.
    pub gloss: Option<String>,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the highlighted candidate.
    pub fn selected_index(&self) -> Option<usize> {
        self.candidates.iter().position(|c| c.selected)
    }

    /// Check if there is composition state to show beyond committed text.
    pub fn has_composition(&self) -> bool {
        !self.phonetic.is_empty() || !self.candidates.is_empty()
    }
}

//! Passage boundary resolution
//!
//! Grows a bare name hit into the sentence around it so the reader sees
//! context rather than a lone name. The search is bounded in both directions
//! by a lookaround measured in grapheme clusters.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

use super::locate::HitRegion;

static TERMINATOR: OnceLock<Regex> = OnceLock::new();

/// `.`, `!` or `?` followed by whitespace, or a bare newline
fn terminator() -> &'static Regex {
    TERMINATOR.get_or_init(|| Regex::new(r"\.\s|[!?]\s|\n").expect("terminator pattern is valid"))
}

// =============================================================================
// Types
// =============================================================================

/// Kind of emphasized passage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassageKind {
    Match,
}

impl PassageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassageKind::Match => "match",
        }
    }
}

/// Byte range `[start, end)` of text to emphasize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub start: usize,
    pub end: usize,
    pub kind: PassageKind,
}

impl Passage {
    pub fn new(start: usize, end: usize, kind: PassageKind) -> Self {
        Self { start, end, kind }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, hit: &HitRegion) -> bool {
        hit.start >= self.start && hit.end <= self.end
    }

    /// True when the passage intersects `[start, end)`
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.end > start && self.start < end
    }
}

// =============================================================================
// Boundary resolution
// =============================================================================

/// Expand `hit` to the enclosing sentence-like passage.
///
/// Backward, the passage starts just after the last terminator within
/// `lookaround` graphemes, or at the window edge when there is none.
/// Forward, it ends on the first terminator: before a newline, after
/// `.`/`!`/`?`, or at the window edge. The result always contains the hit.
pub fn resolve_passage(raw_text: &str, hit: HitRegion, lookaround: usize) -> Passage {
    let hit_start = floor_char_boundary(raw_text, hit.start);
    let hit_end = floor_char_boundary(raw_text, hit.end).max(hit_start);

    let window_start = graphemes_back(raw_text, hit_start, lookaround);
    let start = terminator()
        .find_iter(&raw_text[window_start..hit_start])
        .last()
        .map(|m| window_start + m.end())
        .unwrap_or(window_start);

    let window_end = graphemes_forward(raw_text, hit_end, lookaround);
    let end = match terminator().find(&raw_text[hit_end..window_end]) {
        Some(m) if m.as_str() == "\n" => hit_end + m.start(),
        // Punctuation terminators are ASCII, one byte
        Some(m) => hit_end + m.start() + 1,
        None => window_end,
    };

    Passage::new(start, end, PassageKind::Match)
}

/// Byte offset `count` grapheme clusters before `pos` (or 0)
fn graphemes_back(text: &str, pos: usize, count: usize) -> usize {
    if count == 0 {
        return pos;
    }
    text[..pos]
        .grapheme_indices(true)
        .rev()
        .take(count)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(pos)
}

/// Byte offset `count` grapheme clusters after `pos` (or text end)
fn graphemes_forward(text: &str, pos: usize, count: usize) -> usize {
    text[pos..]
        .grapheme_indices(true)
        .nth(count)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Clamp `index` into the text and back onto a char boundary
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

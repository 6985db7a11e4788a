//! The word-like token found next to a buffer position.
//!
//! A `Token` is recomputed on every capitalization pass and never cached. Its
//! offsets are *character* offsets into the buffer it was read from, which is
//! what host buffers address positions with.
use derive_more::Display;
use std::ops::Range;

/// A symbol with its inclusive start and exclusive end character offsets.
///
/// Invariants:
/// - `end >= start`
/// - `text` holds exactly `end - start` characters
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{text}@{start}..{end}")]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Character length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the text is already fully upper-case.
    pub fn is_upper(&self) -> bool {
        !self.text.chars().any(char::is_lowercase)
    }

    /// Returns true if the position lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `pos == end` returns false.
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

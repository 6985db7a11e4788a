use crate::error::SyntaxError;
use crate::host::{Buffer, LexicalClassifier, SyntaxState};
use crate::sql::{
    Dialect, SqlLexer,
    char_class::{is_marker_gap, is_word_char},
};
use crate::{debug, trace};

/// Decides whether the word at a position may be re-cased.
///
/// The lexical scan always runs over a private snapshot of the buffer, never
/// over the buffer itself, so host-side syntax caches are left alone.
#[derive(Debug, Clone, Default)]
pub struct ContextClassifier<L = SqlLexer> {
    lexer: L,
}

impl<L: LexicalClassifier> ContextClassifier<L> {
    pub fn new(lexer: L) -> Self {
        Self { lexer }
    }

    /// True in code and in eval strings; false in comments, plain strings,
    /// dollar-quote tags, and whenever the lexer cannot classify the position.
    pub fn is_capitalizable<B: Buffer + ?Sized>(
        &self,
        buffer: &B,
        position: usize,
        dialect: Dialect,
    ) -> bool {
        let chars = snapshot_chars(buffer);
        let state = self.lexer.classify_at(&chars, position);
        decide(&chars, position, state, dialect)
    }

    /// [`is_capitalizable`](Self::is_capitalizable) for many positions over
    /// one snapshot. Positions should be ascending.
    pub fn capitalizable_all<B: Buffer + ?Sized>(
        &self,
        buffer: &B,
        positions: &[usize],
        dialect: Dialect,
    ) -> Vec<bool> {
        let chars = snapshot_chars(buffer);
        let states = self.lexer.classify_all(&chars, positions);
        if states.len() != positions.len() {
            debug!(
                "Classifier answered {} of {} positions",
                states.len(),
                positions.len()
            );
            return vec![false; positions.len()];
        }
        positions
            .iter()
            .zip(states)
            .map(|(&position, state)| decide(&chars, position, state, dialect))
            .collect()
    }
}

fn snapshot_chars<B: Buffer + ?Sized>(buffer: &B) -> Vec<char> {
    buffer.snapshot().chars().collect()
}

fn decide(
    chars: &[char],
    position: usize,
    state: Result<SyntaxState, SyntaxError>,
    dialect: Dialect,
) -> bool {
    match state.and_then(SyntaxState::validate) {
        Err(err) => {
            debug!("Treating position {position} as not capitalizable: {err}");
            false
        }
        Ok(state) if state.in_comment || state.in_delimiter => false,
        Ok(SyntaxState {
            in_string: true,
            string_start: Some(open),
            ..
        }) => {
            let eval = is_eval_string(chars, open, dialect);
            trace!("String opened at {open} is an eval string: {eval}");
            eval
        }
        Ok(_) => true,
    }
}

/// Whether the string whose delimiter sits at `open` is preceded by one of the
/// dialect's eval markers, ignoring whitespace between marker and delimiter.
pub fn is_eval_string(chars: &[char], open: usize, dialect: Dialect) -> bool {
    let mut end = open.min(chars.len());
    while end > 0 && is_marker_gap(chars[end - 1]) {
        end -= 1;
    }
    let before = &chars[..end];
    dialect
        .eval_markers()
        .iter()
        .any(|marker| ends_with_marker(before, marker))
}

/// Case-insensitive suffix match. A space in the marker matches any run of
/// whitespace, and a marker starting with a word character must not be glued
/// to a preceding word (`myexecute` is not `execute`).
fn ends_with_marker(text: &[char], marker: &str) -> bool {
    let mut i = text.len();
    for m in marker.chars().rev() {
        if m == ' ' {
            let gap_end = i;
            while i > 0 && is_marker_gap(text[i - 1]) {
                i -= 1;
            }
            if i == gap_end {
                return false;
            }
            continue;
        }
        match i.checked_sub(1).map(|at| text[at]) {
            Some(c) if c.to_lowercase().eq(m.to_lowercase()) => i -= 1,
            _ => return false,
        }
    }
    i == 0 || !marker.starts_with(is_word_char) || !is_word_char(text[i - 1])
}

use crate::error::SyntaxError;

/// Lexical context of a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxState {
    pub in_comment: bool,
    pub in_string: bool,
    /// Position of the opening delimiter of the enclosing string.
    pub string_start: Option<usize>,
    /// Inside the opening or closing tag of a dollar-quoted string.
    pub in_delimiter: bool,
    /// Parenthesis nesting depth. Informational.
    pub depth: i32,
}

impl SyntaxState {
    /// Position inside a multi-character string delimiter opened at `start`.
    pub fn delimiter(start: usize, depth: i32) -> Self {
        Self {
            in_comment: false,
            in_string: true,
            string_start: Some(start),
            in_delimiter: true,
            depth,
        }
    }

    /// Neither comment nor string.
    pub fn is_code(&self) -> bool {
        !self.in_comment && !self.in_string
    }

    /// Reject states that cannot be acted upon.
    pub fn validate(self) -> Result<Self, SyntaxError> {
        if self.in_string && self.string_start.is_none() {
            return Err(SyntaxError::Inconsistent("string without an opening delimiter"));
        }
        if self.in_string && self.in_comment {
            return Err(SyntaxError::Inconsistent("inside a comment and a string at once"));
        }
        if self.in_delimiter && !self.in_string {
            return Err(SyntaxError::Inconsistent("string delimiter outside of a string"));
        }
        Ok(self)
    }
}

/// Lexical classification primitive run over a character snapshot.
///
/// Implementations apply SQL comment and string rules to `content` and report
/// the state at character offset `position`.
pub trait LexicalClassifier {
    fn classify_at(&self, content: &[char], position: usize) -> Result<SyntaxState, SyntaxError>;

    /// Classify several positions of the same snapshot, usually ascending.
    fn classify_all(
        &self,
        content: &[char],
        positions: &[usize],
    ) -> Vec<Result<SyntaxState, SyntaxError>> {
        positions
            .iter()
            .map(|&position| self.classify_at(content, position))
            .collect()
    }
}

impl<F> LexicalClassifier for F
where
    F: Fn(&[char], usize) -> Result<SyntaxState, SyntaxError>,
{
    fn classify_at(&self, content: &[char], position: usize) -> Result<SyntaxState, SyntaxError> {
        self(content, position)
    }
}

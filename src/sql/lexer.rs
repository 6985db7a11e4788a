use crate::error::SyntaxError;
use crate::host::{LexicalClassifier, SyntaxState};

/// Lenient SQL scanner answering "what lexical context is this position in?".
///
/// Scope / Intent:
/// - Runs over a private snapshot of a buffer, never over live host state.
/// - Applies SQL rules regardless of the host's mode, so comments and strings
///   are recognized the same way in any buffer.
/// - Accepts incomplete SQL; an unterminated string simply means every later
///   position is inside that string.
///
/// Behavior:
/// - `--` starts a comment running to the end of the line.
/// - `/*` starts a comment running to the next `*/` (no nesting).
/// - `'` and `"` delimit strings; a doubled delimiter stays inside.
/// - `$$` or `$tag$` opens a dollar-quoted string closed by the same tag.
///   A position anywhere inside either tag is reported as a delimiter.
/// - Parentheses only update `depth`, which may go negative.
///
/// Two-character delimiters only count when fully before `position`, so a
/// position between the two dashes of `--` is still code. Dollar tags are
/// matched against the whole snapshot.
///
/// Complexity:
/// - O(position) for a single scan. [`classify_all`](LexicalClassifier::classify_all)
///   answers ascending positions in one O(n) pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlLexer;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LexerState {
    Code,
    LineComment,
    BlockComment,
    Quoted { delim: char, start: usize },
    DollarQuoted { tag: Vec<char>, start: usize },
}

/// Resumable scan over a character snapshot. Never consumes past the last
/// requested position, so it can be advanced again to any later one.
struct Scanner<'a> {
    chars: &'a [char],
    i: usize,
    state: LexerState,
    depth: i32,
}

impl<'a> Scanner<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            i: 0,
            state: LexerState::Code,
            depth: 0,
        }
    }

    fn advance_to(&mut self, position: usize) -> Result<SyntaxState, SyntaxError> {
        if position > self.chars.len() {
            return Err(SyntaxError::OutOfRange {
                position,
                len: self.chars.len(),
            });
        }

        while self.i < position {
            let c = self.chars[self.i];
            let next = self.chars.get(self.i + 1).copied();
            // A two-character delimiter straddling `position` is left unconsumed.
            let fits = self.i + 2 <= position;
            match &self.state {
                LexerState::Code => match (c, next) {
                    ('-', Some('-')) | ('/', Some('*')) if !fits => break,
                    ('-', Some('-')) => {
                        self.state = LexerState::LineComment;
                        self.i += 2;
                        continue;
                    }
                    ('/', Some('*')) => {
                        self.state = LexerState::BlockComment;
                        self.i += 2;
                        continue;
                    }
                    ('\'' | '"', _) => {
                        self.state = LexerState::Quoted {
                            delim: c,
                            start: self.i,
                        }
                    }
                    ('$', _) => {
                        if let Some(tag) = dollar_tag(self.chars, self.i) {
                            let start = self.i;
                            if start + tag.len() > position {
                                return Ok(SyntaxState::delimiter(start, self.depth));
                            }
                            self.i += tag.len();
                            self.state = LexerState::DollarQuoted { tag, start };
                            continue;
                        }
                    }
                    ('(', _) => self.depth += 1,
                    (')', _) => self.depth -= 1,
                    _ => {}
                },
                LexerState::LineComment => {
                    if c == '\n' {
                        self.state = LexerState::Code;
                    }
                }
                LexerState::BlockComment => {
                    if c == '*' && next == Some('/') {
                        if !fits {
                            break;
                        }
                        self.state = LexerState::Code;
                        self.i += 2;
                        continue;
                    }
                }
                LexerState::Quoted { delim, .. } => {
                    if c == *delim {
                        if next == Some(*delim) {
                            if !fits {
                                break;
                            }
                            self.i += 2;
                            continue;
                        }
                        self.state = LexerState::Code;
                    }
                }
                LexerState::DollarQuoted { tag, start } => {
                    if self.chars[self.i..].starts_with(tag) {
                        if self.i + tag.len() > position {
                            return Ok(SyntaxState::delimiter(*start, self.depth));
                        }
                        self.i += tag.len();
                        self.state = LexerState::Code;
                        continue;
                    }
                }
            }
            self.i += 1;
        }

        let (in_comment, string_start) = match self.state {
            LexerState::Code => (false, None),
            LexerState::LineComment | LexerState::BlockComment => (true, None),
            LexerState::Quoted { start, .. } | LexerState::DollarQuoted { start, .. } => {
                (false, Some(start))
            }
        };
        Ok(SyntaxState {
            in_comment,
            in_string: string_start.is_some(),
            string_start,
            in_delimiter: false,
            depth: self.depth,
        })
    }
}

impl SqlLexer {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(&self, content: &str, position: usize) -> Result<SyntaxState, SyntaxError> {
        let chars: Vec<char> = content.chars().collect();
        self.classify_at(&chars, position)
    }
}

impl LexicalClassifier for SqlLexer {
    fn classify_at(&self, content: &[char], position: usize) -> Result<SyntaxState, SyntaxError> {
        Scanner::new(content).advance_to(position)
    }

    fn classify_all(
        &self,
        content: &[char],
        positions: &[usize],
    ) -> Vec<Result<SyntaxState, SyntaxError>> {
        let mut scanner = Scanner::new(content);
        positions
            .iter()
            .map(|&position| {
                if position < scanner.i {
                    scanner = Scanner::new(content);
                }
                scanner.advance_to(position)
            })
            .collect()
    }
}

/// Opening tag of a dollar-quoted string starting at `at`, `$` signs included.
/// Tags follow identifier rules, so `$1` (a placeholder) is not a tag.
fn dollar_tag(chars: &[char], at: usize) -> Option<Vec<char>> {
    let mut j = at + 1;
    while let Some(&c) = chars.get(j) {
        if c == '$' {
            return Some(chars[at..=j].to_vec());
        }
        let valid = if j == at + 1 {
            c.is_alphabetic() || c == '_'
        } else {
            c.is_alphanumeric() || c == '_'
        };
        if !valid {
            return None;
        }
        j += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn state_at(sql: &str, marker: &str) -> SyntaxState {
        let position = sql[..sql.find(marker).unwrap()].chars().count();
        SqlLexer.scan(sql, position).unwrap()
    }

    #[rstest]
    #[case("select a from t", "from")]
    #[case("select 'x' from t", "from")]
    #[case("select 'it''s' from t", "from")]
    #[case("-- note\nselect 1", "select")]
    #[case("/* a */ select 1", "select")]
    #[case("select $$ body $$ from t", "from")]
    #[case("select $fn$ a $$ b $fn$ from t", "from")]
    #[case("select $1 from t", "from")]
    fn code_positions(#[case] sql: &str, #[case] marker: &str) {
        let state = state_at(sql, marker);
        assert!(state.is_code(), "{marker} in {sql:?} should be code: {state:?}");
    }

    #[rstest]
    #[case("select 1 -- from here", "from")]
    #[case("select /* from */ 1", "from")]
    #[case("select /* never closed from", "from")]
    fn comment_positions(#[case] sql: &str, #[case] marker: &str) {
        let state = state_at(sql, marker);
        assert!(state.in_comment);
        assert!(!state.in_string);
    }

    #[rstest]
    #[case("x = 'select 1'", "select", 4)]
    #[case("x = \"select\"", "select", 4)]
    #[case("x = 'it''s select'", "select", 4)]
    #[case("do $$ select 1 $$", "select", 3)]
    #[case("do $body$ select $$ 1", "select", 3)]
    #[case("x = 'unterminated select", "select", 4)]
    fn string_positions(#[case] sql: &str, #[case] marker: &str, #[case] start: usize) {
        let state = state_at(sql, marker);
        assert!(state.in_string);
        assert!(!state.in_comment);
        assert_eq!(state.string_start, Some(start));
    }

    #[test]
    fn comment_markers_inside_strings_are_text() {
        let state = state_at("x = '-- not a comment' select", "select");
        assert!(state.is_code());
    }

    #[test]
    fn half_of_a_comment_starter_is_code() {
        let state = SqlLexer.scan("a -- b", 3).unwrap();
        assert!(state.is_code());
        let state = SqlLexer.scan("a -- b", 4).unwrap();
        assert!(state.in_comment);
    }

    #[test]
    fn depth_tracks_parentheses() {
        assert_eq!(SqlLexer.scan("f(g(x", 5).unwrap().depth, 2);
        assert_eq!(SqlLexer.scan("a) b", 4).unwrap().depth, -1);
        assert_eq!(SqlLexer.scan("'(' x", 5).unwrap().depth, 0);
    }

    #[test]
    fn positions_are_characters_not_bytes() {
        let sql = "'héllo' select";
        let state = SqlLexer.scan(sql, 8).unwrap();
        assert!(state.is_code());
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert_eq!(
            SqlLexer.scan("abc", 4),
            Err(SyntaxError::OutOfRange { position: 4, len: 3 })
        );
        assert!(SqlLexer.scan("abc", 3).is_ok());
    }

    #[rstest]
    #[case(4)]
    #[case(8)]
    #[case(12)]
    #[case(24)]
    #[case(32)]
    fn dollar_tags_are_delimiters(#[case] position: usize) {
        let sql = "as $function$ select 1 $function$";
        let state = SqlLexer.scan(sql, position).unwrap();
        assert!(state.in_delimiter, "{position}: {state:?}");
        assert!(state.in_string);
        assert_eq!(state.string_start, Some(3));
    }

    #[test]
    fn dollar_quoted_body_is_string_and_after_it_is_code() {
        let sql = "as $function$ select 1 $function$ language sql";
        let body = SqlLexer.scan(sql, 14).unwrap();
        assert!(body.in_string && !body.in_delimiter);
        assert_eq!(body.string_start, Some(3));
        assert!(SqlLexer.scan(sql, 33).unwrap().is_code());
        assert!(SqlLexer.scan(sql, 34).unwrap().is_code());
    }

    #[test]
    fn between_doubled_quotes_is_still_a_string() {
        let state = SqlLexer.scan("'it''s'", 4).unwrap();
        assert!(state.in_string);
        assert_eq!(state.string_start, Some(0));
    }

    #[test]
    fn classify_all_matches_single_scans() {
        let sql = "a -- b\n$x$ c $x$ 'd''e' /* f */ g";
        let chars: Vec<char> = sql.chars().collect();
        let positions: Vec<usize> = (0..=chars.len()).collect();
        let all = SqlLexer.classify_all(&chars, &positions);
        for (position, state) in positions.iter().zip(all) {
            assert_eq!(state, SqlLexer.classify_at(&chars, *position), "{position}");
        }
    }

    #[test]
    fn classify_all_restarts_on_earlier_positions() {
        let chars: Vec<char> = "'x' y".chars().collect();
        let all = SqlLexer.classify_all(&chars, &[5, 1, 9]);
        assert!(all[0].as_ref().unwrap().is_code());
        assert!(all[1].as_ref().unwrap().in_string);
        assert!(all[2].is_err());
    }
}

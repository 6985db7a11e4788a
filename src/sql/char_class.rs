//! Character classification shared by the symbol locator and the lexer.

/// Word constituent: alphanumeric or underscore. `my_table` is one word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whitespace skipped between an eval marker and a string delimiter.
#[inline]
pub fn is_marker_gap(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

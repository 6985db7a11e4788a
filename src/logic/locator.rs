use crate::host::Buffer;
use crate::logic::Direction;
use crate::sql::{Token, char_class::is_word_char};

/// Move from `position` by one symbol in `direction` and return that symbol.
///
/// Behaves like a word motion where underscore is a word character: backward
/// lands on the start of the previous symbol, forward on the end of the next
/// one. The cursor is left on the landing point; callers hold a
/// [`SavedCursor`](crate::logic::SavedCursor) to restore it. The returned
/// token always covers the whole symbol around the landing point.
///
/// Returns `None` when there is no symbol in that direction.
pub fn locate<B: Buffer + ?Sized>(
    buffer: &mut B,
    position: usize,
    direction: Direction,
) -> Option<Token> {
    let len = buffer.len_chars();
    let mut pos = position.min(len);

    let (start, end) = match direction {
        Direction::Backward => {
            while pos > 0 && !word_at(&*buffer, pos - 1) {
                pos -= 1;
            }
            if pos == 0 {
                return None;
            }
            while pos > 0 && word_at(&*buffer, pos - 1) {
                pos -= 1;
            }
            let start = pos;
            let mut end = start;
            while word_at(&*buffer, end) {
                end += 1;
            }
            buffer.set_cursor(start);
            (start, end)
        }
        Direction::Forward => {
            while pos < len && !word_at(&*buffer, pos) {
                pos += 1;
            }
            if pos == len {
                return None;
            }
            while pos < len && word_at(&*buffer, pos) {
                pos += 1;
            }
            let end = pos;
            let mut start = end;
            while start > 0 && word_at(&*buffer, start - 1) {
                start -= 1;
            }
            buffer.set_cursor(end);
            (start, end)
        }
    };

    Some(Token::new(buffer.read(start..end), start, end))
}

fn word_at<B: Buffer + ?Sized>(buffer: &B, pos: usize) -> bool {
    buffer.char_at(pos).is_some_and(is_word_char)
}

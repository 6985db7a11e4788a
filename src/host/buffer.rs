use crate::host::ModeId;
use std::ops::Range;

/// Host buffer as seen by the capitalization core.
///
/// All positions are character offsets. The core reads text, moves the cursor
/// temporarily while locating symbols (always restoring it), and mutates text
/// only through `upcase_range`, which must replace the span in place without
/// going through the host's input handling.
pub trait Buffer {
    /// Length of the buffer in characters.
    fn len_chars(&self) -> usize;

    fn char_at(&self, pos: usize) -> Option<char>;

    /// Text of `range`, clamped to the buffer.
    fn read(&self, range: Range<usize>) -> String;

    /// Copy of the whole buffer. The core scans this instead of the buffer.
    fn snapshot(&self) -> String {
        self.read(0..self.len_chars())
    }

    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, pos: usize);

    /// Upper-case `range` in place. Must not change the buffer's length.
    fn upcase_range(&mut self, range: Range<usize>);

    /// The buffer's major mode.
    fn mode(&self) -> ModeId;

    /// Keyword metadata the mode exposes for highlighting, if any. Entries may
    /// be plain words or whole-token patterns.
    fn mode_keywords(&self) -> Option<Vec<String>> {
        None
    }
}

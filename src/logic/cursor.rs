use crate::host::Buffer;
use std::ops::{Deref, DerefMut};

/// Direction of a symbol search relative to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Saves the buffer's cursor and puts it back when dropped, so every exit path
/// of a capitalization pass leaves the user's insertion point untouched.
pub struct SavedCursor<'a, B: Buffer + ?Sized> {
    buffer: &'a mut B,
    saved: usize,
}

impl<'a, B: Buffer + ?Sized> SavedCursor<'a, B> {
    pub fn new(buffer: &'a mut B) -> Self {
        let saved = buffer.cursor();
        Self { buffer, saved }
    }

    pub fn saved(&self) -> usize {
        self.saved
    }
}

impl<B: Buffer + ?Sized> Deref for SavedCursor<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        &*self.buffer
    }
}

impl<B: Buffer + ?Sized> DerefMut for SavedCursor<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut *self.buffer
    }
}

impl<B: Buffer + ?Sized> Drop for SavedCursor<'_, B> {
    fn drop(&mut self) {
        self.buffer.set_cursor(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryBuffer;

    #[test]
    fn restores_cursor_on_drop() {
        let mut buffer = MemoryBuffer::new("select 1");
        buffer.set_cursor(3);
        {
            let mut guard = SavedCursor::new(&mut buffer);
            guard.set_cursor(7);
            assert_eq!(guard.cursor(), 7);
            assert_eq!(guard.saved(), 3);
        }
        assert_eq!(buffer.cursor(), 3);
    }
}

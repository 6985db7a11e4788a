use crate::host::{Buffer, ModeId};
use ropey::Rope;
use std::ops::Range;

/// In-memory buffer backed by a rope.
///
/// Used by the command line tool and by tests as a stand-in for a host editor
/// buffer. `insert` simulates typing: it inserts at the cursor and moves the
/// cursor past the inserted text.
#[derive(Debug, Clone)]
pub struct MemoryBuffer {
    text: Rope,
    cursor: usize,
    mode: ModeId,
    keywords: Option<Vec<String>>,
    upcases: usize,
}

impl MemoryBuffer {
    /// A SQL-mode buffer holding `text` with the cursor at the end.
    pub fn new(text: &str) -> Self {
        let text = Rope::from_str(text);
        Self {
            cursor: text.len_chars(),
            text,
            mode: ModeId::Sql,
            keywords: None,
            upcases: 0,
        }
    }

    pub fn with_mode(mut self, mode: ModeId) -> Self {
        self.mode = mode;
        self
    }

    /// Expose keyword metadata, as a SQL mode with highlighting rules would.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }

    /// Insert at the cursor and move the cursor past the new text.
    pub fn insert(&mut self, text: &str) {
        self.text.insert(self.cursor, text);
        self.cursor += text.chars().count();
    }

    /// Number of `upcase_range` calls that changed the text.
    pub fn upcase_count(&self) -> usize {
        self.upcases
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let len = self.text.len_chars();
        let end = range.end.min(len);
        range.start.min(end)..end
    }
}

impl Buffer for MemoryBuffer {
    fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get_char(pos)
    }

    fn read(&self, range: Range<usize>) -> String {
        self.text.slice(self.clamp(range)).to_string()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.text.len_chars());
    }

    fn upcase_range(&mut self, range: Range<usize>) {
        let range = self.clamp(range);
        let original = self.read(range.clone());
        // Characters whose upper case form is longer (`ß`) are kept as-is so
        // offsets stay valid.
        let upper: String = original
            .chars()
            .map(|c| {
                let mut up = c.to_uppercase();
                match (up.next(), up.next()) {
                    (Some(u), None) => u,
                    _ => c,
                }
            })
            .collect();
        if upper == original {
            return;
        }
        self.text.remove(range.clone());
        self.text.insert(range.start, &upper);
        self.upcases += 1;
    }

    fn mode(&self) -> ModeId {
        self.mode.clone()
    }

    fn mode_keywords(&self) -> Option<Vec<String>> {
        self.keywords.clone()
    }
}

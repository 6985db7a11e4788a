use crate::testing::*;
use crate::*;
use test_context::TestContext;
pub use test_context::test_context;

/// An enabled engine on an empty PostgreSQL buffer, driven by simulated typing.
pub struct Editing {
    pub buffer: MemoryBuffer,
    pub dialects: DialectSelection,
    pub sqlup: Sqlup,
}

impl Editing {
    /// Type `text` one character at a time, running the post-edit callback
    /// after each character. A newline is typed as the Return key.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.buffer.insert(c.encode_utf8(&mut [0; 4]));
            let event = match c {
                '\n' => InputEvent::Key('\r'),
                c => InputEvent::from(c),
            };
            self.sqlup.post_edit(&mut self.buffer, &self.dialects, &event);
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }
}

impl TestContext for Editing {
    fn setup() -> Self {
        common_init();
        let mut dialects = DialectSelection::with(Dialect::Postgres);
        let mut sqlup = Sqlup::new();
        sqlup.enable(&mut dialects);
        Self {
            buffer: MemoryBuffer::new(""),
            dialects,
            sqlup,
        }
    }

    fn teardown(mut self) {
        self.sqlup.disable(&mut self.dialects);
        assert_eq!(self.dialects.listener_count(), 0);
    }
}

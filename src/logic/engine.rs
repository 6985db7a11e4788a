use crate::host::{Buffer, DialectSelection, LexicalClassifier, ListenerId, MemoryBuffer};
use crate::logic::{
    ContextClassifier, Direction, InputEvent, KeywordSetResolver, SavedCursor, locate,
    should_trigger,
};
use crate::sql::{Dialect, SqlLexer, Token};
use crate::*;

/// Keyword capitalization state for one buffer.
///
/// The host creates one `Sqlup` per buffer, calls [`enable`](Self::enable) to
/// switch it on, and forwards every edit to [`post_edit`](Self::post_edit).
/// [`capitalize_region`](Self::capitalize_region) works whether or not the
/// engine is enabled.
///
/// None of the operations report errors: a word is either upper-cased or left
/// untouched.
#[derive(Debug, Default)]
pub struct Sqlup<L = SqlLexer> {
    resolver: KeywordSetResolver,
    classifier: ContextClassifier<L>,
    subscription: Option<ListenerId>,
}

impl Sqlup<SqlLexer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: LexicalClassifier> Sqlup<L> {
    /// Engine using a host-provided lexical classifier.
    pub fn with_classifier(lexer: L) -> Self {
        Self {
            resolver: KeywordSetResolver::new(),
            classifier: ContextClassifier::new(lexer),
            subscription: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn resolver(&self) -> &KeywordSetResolver {
        &self.resolver
    }

    /// Start reacting to edits. Subscribes to dialect changes once and always
    /// drops the cached keyword set.
    pub fn enable(&mut self, dialects: &mut DialectSelection) {
        if self.subscription.is_none() {
            self.subscription = Some(dialects.subscribe(self.resolver.invalidator()));
            debug!("Keyword capitalization enabled ({})", dialects.active());
        }
        self.resolver.invalidate();
    }

    /// Stop reacting to edits and drop the dialect subscription.
    pub fn disable(&mut self, dialects: &mut DialectSelection) {
        if let Some(id) = self.subscription.take() {
            dialects.unsubscribe(id);
            debug!("Keyword capitalization disabled");
        }
    }

    /// Post-edit callback. Runs one pass on the word before the cursor when
    /// the engine is enabled and `event` is a trigger.
    pub fn post_edit<B: Buffer + ?Sized>(
        &self,
        buffer: &mut B,
        dialects: &DialectSelection,
        event: &InputEvent,
    ) -> bool {
        if !self.is_enabled() || !should_trigger(event) {
            return false;
        }
        let position = buffer.cursor();
        trace!("{event:?} triggered a pass at {position}");
        self.maybe_capitalize(buffer, dialects, position, Direction::Backward)
    }

    /// Upper-case the symbol next to `position` if it is a keyword in a
    /// capitalizable context. Returns true if the buffer was written.
    pub fn maybe_capitalize<B: Buffer + ?Sized>(
        &self,
        buffer: &mut B,
        dialects: &DialectSelection,
        position: usize,
        direction: Direction,
    ) -> bool {
        let mut buffer = SavedCursor::new(buffer);
        let Some(token) = locate(&mut *buffer, position, direction) else {
            trace!("No symbol {direction:?} of {position}");
            return false;
        };
        let at = buffer.cursor();
        self.capitalize_token(&mut *buffer, dialects.active(), &token, at)
    }

    /// Run the per-symbol logic over every symbol starting in `start..end`.
    /// The span is cut at token starts: a symbol starting at or after `end`
    /// is never examined, even when whitespace before it lies inside the span.
    /// Returns the number of symbols written.
    ///
    /// Keywords are collected first and then classified together over a
    /// single snapshot. Upper-casing only changes case, so the lexical
    /// context of later keywords is unaffected.
    pub fn capitalize_region<B: Buffer + ?Sized>(
        &self,
        buffer: &mut B,
        dialects: &DialectSelection,
        start: usize,
        end: usize,
    ) -> usize {
        let mut buffer = SavedCursor::new(buffer);
        let end = end.min(buffer.len_chars());
        let dialect = dialects.active();
        let keywords = self.resolver.resolve(&*buffer, dialect);

        let mut candidates: Vec<(Token, usize)> = Vec::new();
        let mut position = start;
        while position < end {
            let Some(token) = locate(&mut *buffer, position, Direction::Forward) else {
                break;
            };
            if token.start >= end {
                break;
            }
            position = token.end;
            if !token.is_empty() && keywords.contains(&token.text) {
                let at = buffer.cursor();
                candidates.push((token, at));
            }
        }

        let positions: Vec<usize> = candidates.iter().map(|(_, at)| *at).collect();
        let verdicts = self
            .classifier
            .capitalizable_all(&*buffer, &positions, dialect);
        let mut written = 0;
        for ((token, _), capitalizable) in candidates.iter().zip(verdicts) {
            if !capitalizable {
                trace!("Keyword {token} is not in code");
                continue;
            }
            if !token.is_upper() {
                debug!("Upper-casing {token}");
            }
            buffer.upcase_range(token.range());
            written += 1;
        }
        debug!("Capitalized {written} keywords in {start}..{end}");
        written
    }

    fn capitalize_token<B: Buffer + ?Sized>(
        &self,
        buffer: &mut B,
        dialect: Dialect,
        token: &Token,
        at: usize,
    ) -> bool {
        if token.is_empty() {
            return false;
        }
        if !self.resolver.resolve(&*buffer, dialect).contains(&token.text) {
            return false;
        }
        if !self.classifier.is_capitalizable(&*buffer, at, dialect) {
            trace!("Keyword {token} is not in code");
            return false;
        }
        if !token.is_upper() {
            debug!("Upper-casing {token}");
        }
        buffer.upcase_range(token.range());
        true
    }
}

/// Capitalize every keyword in `text` as if it were a SQL buffer using
/// `dialect`.
pub fn capitalize_str(text: &str, dialect: Dialect) -> String {
    let mut buffer = MemoryBuffer::new(text);
    let dialects = DialectSelection::with(dialect);
    let len = buffer.len_chars();
    Sqlup::new().capitalize_region(&mut buffer, &dialects, 0, len);
    buffer.text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_is_idempotent() {
        let mut dialects = DialectSelection::new();
        let mut sqlup = Sqlup::new();
        sqlup.enable(&mut dialects);
        sqlup.enable(&mut dialects);
        assert!(sqlup.is_enabled());
        assert_eq!(dialects.listener_count(), 1);

        sqlup.disable(&mut dialects);
        sqlup.disable(&mut dialects);
        assert!(!sqlup.is_enabled());
        assert_eq!(dialects.listener_count(), 0);
    }

    #[test]
    fn enable_resets_the_keyword_cache() {
        let mut dialects = DialectSelection::new();
        let mut buffer = MemoryBuffer::new("select");
        let mut sqlup = Sqlup::new();
        sqlup.capitalize_region(&mut buffer, &dialects, 0, 6);
        assert!(sqlup.resolver().is_resolved());

        sqlup.enable(&mut dialects);
        assert!(!sqlup.resolver().is_resolved());
    }

    #[test]
    fn disabled_engine_ignores_edits() {
        let dialects = DialectSelection::new();
        let mut buffer = MemoryBuffer::new("select ");
        let sqlup = Sqlup::new();
        assert!(!sqlup.post_edit(&mut buffer, &dialects, &InputEvent::from(' ')));
        assert_eq!(buffer.text(), "select ");
    }

    #[test]
    fn capitalize_str_upcases_code_only() {
        assert_eq!(
            capitalize_str("select a from t where b = 'from' -- order", Dialect::Ansi),
            "SELECT a FROM t WHERE b = 'from' -- order"
        );
    }
}

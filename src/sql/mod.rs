//! Lexical building blocks for keyword capitalization.
//!
//! This module groups what the capitalization engine needs to know about SQL
//! text without parsing it:
//!
//! Modules:
//! - `dialect`    : Supported dialects and their eval-string markers.
//! - `keyword`    : Built-in keyword lists and the `KeywordSet` cache value.
//! - `token`      : Word-like token with character offsets.
//! - `char_class` : Word-constituent rules (underscore counts as a word char).
//! - `lexer`      : Default lexical classifier for comments and strings.
//!
//! Design Principles:
//! 1. Accept incomplete SQL (the user is in the middle of typing it).
//! 2. Address text by character offsets, the way editor buffers do.
//! 3. Never fail loudly; callers treat uncertainty as "leave it alone".
//!
//! Example:
//! ```rust
//! use sqlup::sql::prelude::*;
//!
//! let keywords = KeywordSet::builtin(Dialect::Postgres);
//! assert!(keywords.contains("RETURNING"));
//! assert!(SqlLexer.scan("select 'from", 9).unwrap().in_string);
//! ```

pub mod char_class;
pub mod dialect;
pub mod keyword;
pub mod lexer;
pub mod token;

pub use dialect::Dialect;
pub use keyword::{KeywordEntry, KeywordSet};
pub use lexer::SqlLexer;
pub use token::Token;

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use sqlup::sql::prelude::*;`
pub mod prelude {
    pub use super::{Dialect, KeywordEntry, KeywordSet, SqlLexer, Token};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_and_lexer_work_together() {
        let sql = "select col from tbl -- where";
        let keywords = KeywordSet::builtin(Dialect::Ansi);
        assert!(keywords.contains("select"));
        assert!(keywords.contains("where"));
        assert!(SqlLexer.scan(sql, 23).unwrap().in_comment);
        assert!(!SqlLexer.scan(sql, 11).unwrap().in_comment);
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let token = Token::new("FROM", 0, 4);
        assert!(KeywordSet::builtin(Dialect::default()).contains(&token.text));
    }
}

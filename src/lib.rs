//! Context-sensitive upper-casing of SQL keywords while a buffer is edited.
//!
//! A host editor calls [`Sqlup::post_edit`] after every edit. When the edit
//! was a trigger (space, `;`, `,`, `(`, `'` or Enter) the word just before the
//! cursor is upper-cased, provided it is a keyword of the buffer's dialect and
//! does not sit inside a comment or a plain string literal. Strings handed to
//! dynamic-SQL constructs such as PostgreSQL's `EXECUTE format(...)` count as
//! code.
//!
//! ```rust
//! use sqlup::prelude::*;
//!
//! assert_eq!(
//!     capitalize_str("select 1 -- select", Dialect::Ansi),
//!     "SELECT 1 -- select"
//! );
//! ```
reexport!(error);
reexport!(config);
pub mod sql;
reexport!(host);
reexport!(logic);
reexport!(testing, test);
pub use sql::{Dialect, KeywordEntry, KeywordSet, SqlLexer, Token};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

/// Convenience prelude re-exporting what a host integration usually needs.
pub mod prelude {
    pub use crate::host::{Buffer, DialectSelection, MemoryBuffer, ModeId};
    pub use crate::logic::{Direction, InputEvent, Sqlup, capitalize_str};
    pub use crate::sql::{Dialect, KeywordSet};
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

//! SQL dialects and the markers that turn a string literal into dynamic SQL.
//!
//! Exactly one dialect is active per buffer. The dialect picks the default
//! keyword list (see `keyword.rs`) and the eval markers listed here.

use crate::error::{Error, Result};
use derive_more::Display;
use std::str::FromStr;

/// A named variant of SQL keyword and syntax rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Dialect {
    #[default]
    #[display("ansi")]
    Ansi,
    #[display("postgres")]
    Postgres,
    #[display("mysql")]
    MySql,
    #[display("ms")]
    MsSql,
    #[display("oracle")]
    Oracle,
    #[display("sqlite")]
    Sqlite,
    /// Every keyword the `sqlparser` crate knows about.
    #[display("generic")]
    Generic,
}

impl Dialect {
    pub const ALL: [Self; 7] = [
        Dialect::Ansi,
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::MsSql,
        Dialect::Oracle,
        Dialect::Sqlite,
        Dialect::Generic,
    ];

    /// Markers which, found right before a string's opening delimiter, mark
    /// that string as dynamically executed SQL. Entries are lower-case and
    /// matched case-insensitively.
    pub const fn eval_markers(self) -> &'static [&'static str] {
        use Dialect::*;
        match self {
            Postgres => &["execute", "format("],
            MsSql => &["exec", "execute", "sp_executesql"],
            Oracle => &["execute immediate"],
            Ansi | MySql | Sqlite | Generic => &[],
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use Dialect::*;
        let dialect = match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ansi,
            "postgres" | "postgresql" | "pg" => Postgres,
            "mysql" | "mariadb" => MySql,
            "ms" | "mssql" | "sqlserver" | "tsql" => MsSql,
            "oracle" => Oracle,
            "sqlite" => Sqlite,
            "generic" => Generic,
            _ => return Err(Error::UnknownDialect(s.to_string())),
        };
        Ok(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ansi", Dialect::Ansi)]
    #[case("PostgreSQL", Dialect::Postgres)]
    #[case(" pg ", Dialect::Postgres)]
    #[case("mariadb", Dialect::MySql)]
    #[case("tsql", Dialect::MsSql)]
    #[case("oracle", Dialect::Oracle)]
    fn parses_names_and_aliases(#[case] name: &str, #[case] expected: Dialect) {
        assert_eq!(name.parse::<Dialect>().ok(), Some(expected));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>().ok(), Some(dialect));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            "dbase".parse::<Dialect>(),
            Err(Error::UnknownDialect(name)) if name == "dbase"
        ));
    }

    #[test]
    fn unknown_dialect_lists_known_names() {
        let message = "dbase".parse::<Dialect>().unwrap_err().to_string();
        assert_eq!(
            message,
            "Unknown dialect: dbase (expected one of ansi, postgres, mysql, ms, oracle, sqlite, generic)"
        );
    }

    #[test]
    fn only_products_with_dynamic_sql_have_markers() {
        assert!(Dialect::Ansi.eval_markers().is_empty());
        assert!(Dialect::Postgres.eval_markers().contains(&"format("));
        assert!(Dialect::MsSql.eval_markers().contains(&"sp_executesql"));
    }
}

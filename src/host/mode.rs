use derive_more::Display;

/// Identity of a buffer's major mode, as far as keyword resolution cares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ModeId {
    /// A SQL editing mode.
    #[display("sql")]
    Sql,
    /// The Redis command-language mode, which brings its own keywords.
    #[display("redis")]
    Redis,
    #[display("{_0}")]
    Other(String),
}

impl From<&str> for ModeId {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "sql" | "sql-mode" | "sql-interactive-mode" => ModeId::Sql,
            "redis" | "redis-mode" => ModeId::Redis,
            _ => ModeId::Other(value.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!(ModeId::from("sql-mode"), ModeId::Sql);
        assert_eq!(ModeId::from("SQL"), ModeId::Sql);
        assert_eq!(ModeId::from("redis-mode"), ModeId::Redis);
        assert_eq!(ModeId::from(" text "), ModeId::Other("text".into()));
    }

    #[test]
    fn display_names() {
        assert_eq!(ModeId::Sql.to_string(), "sql");
        assert_eq!(ModeId::Other("org".into()).to_string(), "org");
    }
}

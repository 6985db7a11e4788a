use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Dialect used when the caller does not name one.
    #[config(env = "SQLUP_DIALECT", default = "ansi")]
    pub dialect: String,
    /// Mode identity given to buffers created by the command line tool.
    #[config(env = "SQLUP_MODE", default = "sql")]
    pub mode: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }

    pub fn dialect(&self) -> Result<Dialect> {
        self.dialect.parse()
    }

    pub fn mode(&self) -> ModeId {
        ModeId::from(self.mode.as_str())
    }
}

/// Process-wide configuration, loaded from the environment on first access.
pub fn config() -> Result<&'static Config> {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = Config::load()?;
    Ok(CONFIG.get_or_init(|| loaded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_ansi_sql() {
        let config = Config {
            dialect: "ansi".into(),
            mode: "sql".into(),
        };
        assert_eq!(config.dialect().ok(), Some(Dialect::Ansi));
        assert_eq!(config.mode(), ModeId::Sql);
    }

    #[test]
    fn unknown_dialect_is_reported() {
        let config = Config {
            dialect: "cobol".into(),
            mode: "sql".into(),
        };
        assert!(matches!(config.dialect(), Err(Error::UnknownDialect(d)) if d == "cobol"));
    }
}

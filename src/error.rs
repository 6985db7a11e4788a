use itertools::Itertools as _;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Unknown dialect: {0} (expected one of {known})",
        known = crate::Dialect::ALL.iter().join(", ")
    )]
    UnknownDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Invalid keyword pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Failure reported by a lexical classifier. The capitalization core never
/// propagates these; a failed classification means "leave the word alone".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("position {position} is outside of the scanned text (length {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("inconsistent syntax state: {0}")]
    Inconsistent(&'static str),
}

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}

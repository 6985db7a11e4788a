//! `sqlup`: upper-case the SQL keywords of stdin and write the result to
//! stdout. The dialect is the first argument, or `SQLUP_DIALECT`.
//!
//! `sqlup --keywords [DIALECT]` prints the built-in keyword list instead.
use sqlup::prelude::*;
use std::io::{Read as _, Write as _};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> sqlup::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = sqlup::config()?;
    let mut args = std::env::args().skip(1).peekable();
    let list_keywords = args.next_if(|arg| arg == "--keywords").is_some();
    let dialect = match args.next() {
        Some(name) => name.parse::<Dialect>()?,
        None => config.dialect()?,
    };

    if list_keywords {
        let keywords = match config.mode() {
            ModeId::Redis => KeywordSet::redis(),
            _ => KeywordSet::builtin(dialect),
        };
        let mut out = std::io::stdout().lock();
        for word in keywords.words() {
            writeln!(out, "{word}")?;
        }
        return Ok(());
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let mut buffer = MemoryBuffer::new(&input).with_mode(config.mode());
    let dialects = DialectSelection::with(dialect);
    let end = buffer.len_chars();
    let written = Sqlup::new().capitalize_region(&mut buffer, &dialects, 0, end);
    info!("Capitalized {written} keywords using the {dialect} dialect");

    std::io::stdout().write_all(buffer.text().as_bytes())?;
    Ok(())
}

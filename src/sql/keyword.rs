//! Keyword lists and the per-buffer `KeywordSet` built from them.
//!
//! Every list in this module is stored lower-cased. A `KeywordSet` answers
//! whole-token, case-insensitive membership queries: `SELECTION` never matches
//! `select`.
//!
//! Design notes:
//! - Dialect lists are the ANSI core plus product specific additions.
//! - `Dialect::Generic` borrows the full keyword table of the `sqlparser`
//!   crate, which is much larger than any single product list.
//! - Hosts may hand over their own keyword metadata, in which case entries can
//!   also be regular expressions (see `KeywordEntry::parse`).

use crate::error::Result;
use crate::sql::dialect::Dialect;
use itertools::Itertools;
use regex::Regex;
use std::collections::HashSet;

pub const ANSI_KEYWORDS: &[&str] = &[
    "absolute", "action", "add", "all", "allocate", "alter", "and", "any", "are", "as", "asc",
    "assertion", "at", "authorization", "avg", "begin", "between", "bigint", "bit", "boolean",
    "both", "by", "call", "cascade", "cascaded", "case", "cast", "catalog", "char", "character",
    "check", "close", "coalesce", "collate", "column", "commit", "connect", "connection",
    "constraint", "constraints", "continue", "convert", "corresponding", "count", "create",
    "cross", "current", "current_date", "current_time", "current_timestamp", "current_user",
    "cursor", "date", "day", "deallocate", "dec", "decimal", "declare", "default", "deferrable",
    "deferred", "delete", "desc", "describe", "descriptor", "disconnect", "distinct", "domain",
    "double", "drop", "else", "end", "escape", "except", "exception", "exec", "execute", "exists",
    "external", "extract", "false", "fetch", "first", "float", "for", "foreign", "found", "from",
    "full", "function", "get", "global", "go", "goto", "grant", "group", "having", "hour",
    "identity", "immediate", "in", "index", "indicator", "initially", "inner", "input",
    "insensitive", "insert", "int", "integer", "intersect", "interval", "into", "is",
    "isolation", "join", "key", "language", "last", "leading", "left", "level", "like", "limit",
    "local", "lower", "match", "max", "min", "minute", "module", "month", "natural", "nchar",
    "next", "no", "not", "null", "nullif", "numeric", "of", "offset", "on", "only", "open",
    "option", "or", "order", "outer", "output", "over", "overlaps", "partition", "precision",
    "prepare", "primary", "prior", "privileges", "procedure", "public", "real", "references",
    "relative", "replace", "restrict", "return", "returns", "revoke", "right", "rollback",
    "row", "rows", "schema", "scroll", "second", "section", "select", "session",
    "session_user", "set", "smallint", "some", "sql", "substring", "sum", "system_user",
    "table", "temporary", "then", "time", "timestamp", "to", "trailing", "transaction",
    "translate", "trigger", "trim", "true", "union", "unique", "unknown", "update", "upper",
    "usage", "user", "using", "values", "varchar", "varying", "view", "when", "whenever",
    "where", "with", "work", "write", "year", "zone",
];

pub const POSTGRES_KEYWORDS: &[&str] = &[
    "analyze", "array", "bytea", "concurrently", "conflict", "copy", "do", "elsif", "enum",
    "explain", "extension", "format", "ilike", "jsonb", "lateral", "listen", "loop",
    "materialized", "notify", "nothing", "perform", "plpgsql", "raise", "recursive",
    "refresh", "returning", "security", "sequence", "serial", "similar", "strict", "text",
    "truncate", "uuid", "vacuum", "volatile",
];

pub const MYSQL_KEYWORDS: &[&str] = &[
    "auto_increment", "charset", "delimiter", "duplicate", "engine", "enum", "explain",
    "ignore", "longtext", "mediumint", "mediumtext", "regexp", "rlike", "show", "straight_join",
    "tinyint", "tinytext", "truncate", "unsigned", "use", "zerofill",
];

pub const MSSQL_KEYWORDS: &[&str] = &[
    "apply", "clustered", "identity_insert", "merge", "nocount", "nolock", "nonclustered",
    "nvarchar", "pivot", "print", "raiserror", "sp_executesql", "top", "tran", "truncate",
    "try", "unpivot", "waitfor",
];

pub const ORACLE_KEYWORDS: &[&str] = &[
    "connect_by_root", "decode", "elsif", "loop", "merge", "minus", "nocopy", "number", "nvl",
    "nvl2", "package", "pls_integer", "prior", "raise", "rownum", "start", "sysdate", "varchar2",
];

pub const SQLITE_KEYWORDS: &[&str] = &[
    "attach", "autoincrement", "detach", "explain", "glob", "ifnull", "indexed", "pragma",
    "reindex", "rowid", "vacuum", "without",
];

/// Command words of the Redis command language, used for buffers in the
/// Redis mode rather than any SQL dialect.
pub const REDIS_KEYWORDS: &[&str] = &[
    "append", "auth", "bgsave", "blpop", "brpop", "dbsize", "decr", "decrby", "del", "discard",
    "echo", "eval", "exec", "exists", "expire", "expireat", "flushall", "flushdb", "get",
    "getset", "hdel", "hexists", "hget", "hgetall", "hincrby", "hkeys", "hlen", "hmget", "hmset",
    "hset", "hvals", "incr", "incrby", "info", "keys", "lindex", "llen", "lpop", "lpush",
    "lrange", "lrem", "lset", "ltrim", "mget", "move", "mset", "multi", "persist", "ping",
    "publish", "quit", "randomkey", "rename", "rpop", "rpush", "sadd", "save", "scard",
    "select", "set", "setex", "setnx", "sismember", "smembers", "spop", "srem", "subscribe",
    "ttl", "type", "unsubscribe", "unwatch", "watch", "zadd", "zcard", "zincrby", "zrange",
    "zrank", "zrem", "zscore",
];

/// Built-in keywords for `dialect`, lower-cased. May contain duplicates.
pub fn dialect_keywords(dialect: Dialect) -> Box<dyn Iterator<Item = String>> {
    let extras: &'static [&'static str] = match dialect {
        Dialect::Ansi => &[],
        Dialect::Postgres => POSTGRES_KEYWORDS,
        Dialect::MySql => MYSQL_KEYWORDS,
        Dialect::MsSql => MSSQL_KEYWORDS,
        Dialect::Oracle => ORACLE_KEYWORDS,
        Dialect::Sqlite => SQLITE_KEYWORDS,
        Dialect::Generic => {
            return Box::new(
                sqlparser::keywords::ALL_KEYWORDS
                    .iter()
                    .map(|kw| kw.to_ascii_lowercase())
                    .chain(ANSI_KEYWORDS.iter().map(|kw| kw.to_string())),
            );
        }
    };
    Box::new(ANSI_KEYWORDS.iter().chain(extras).map(|kw| kw.to_string()))
}

/// One keyword entry supplied by a host: either a literal word or a pattern
/// the whole token must match.
#[derive(Debug, Clone)]
pub enum KeywordEntry {
    Literal(String),
    Pattern(Regex),
}

impl KeywordEntry {
    const PATTERN_CHARS: &'static [char] = &[
        '\\', '^', '$', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|',
    ];

    /// Classify a raw entry. Entries containing regex metacharacters become
    /// case-insensitive patterns anchored to the whole token.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.contains(Self::PATTERN_CHARS) {
            let anchored = format!("(?i)^(?:{raw})$");
            return Ok(KeywordEntry::Pattern(Regex::new(&anchored)?));
        }
        Ok(KeywordEntry::Literal(raw.to_lowercase()))
    }
}

/// Set of recognized keywords for one buffer.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    words: HashSet<String>,
    patterns: Vec<Regex>,
}

impl KeywordSet {
    /// Build a set of literal words; each word is lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            patterns: Vec::new(),
        }
    }

    /// Build a set from raw host entries, which may mix words and patterns.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for entry in entries {
            if entry.as_ref().trim().is_empty() {
                continue;
            }
            set.insert(KeywordEntry::parse(entry.as_ref())?);
        }
        Ok(set)
    }

    /// Default keyword set for a dialect.
    pub fn builtin(dialect: Dialect) -> Self {
        Self::from_words(dialect_keywords(dialect))
    }

    /// Keyword set for buffers in the Redis mode.
    pub fn redis() -> Self {
        Self::from_words(REDIS_KEYWORDS)
    }

    pub fn insert(&mut self, entry: KeywordEntry) {
        match entry {
            KeywordEntry::Literal(word) => {
                self.words.insert(word);
            }
            KeywordEntry::Pattern(pattern) => self.patterns.push(pattern),
        }
    }

    /// Case-insensitive whole-token membership.
    pub fn contains(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        self.words.contains(&token.to_lowercase())
            || self.patterns.iter().any(|p| p.is_match(token))
    }

    /// Number of entries, words and patterns combined.
    pub fn len(&self) -> usize {
        self.words.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Literal words in alphabetical order.
    pub fn words(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).sorted_unstable().collect()
    }
}

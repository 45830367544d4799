//! PostgreSQL dialect.

use std::sync::LazyLock;

use super::Dialect;
use crate::lexer::KeywordTable;

static KEYWORDS: LazyLock<KeywordTable> = LazyLock::new(KeywordTable::postgres);

/// The PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn keywords(&self) -> &KeywordTable {
        &KEYWORDS
    }
}

//! openGauss dialect implementation.

use std::sync::LazyLock;

use strata_sql_core::dialect::Dialect;
use strata_sql_core::lexer::{Keyword, KeywordClass, KeywordTable};
use tracing::debug;

/// Words openGauss reserves on top of the PostgreSQL table.
const RESERVED_EXTENSIONS: &[Keyword] = &[Keyword::Minus, Keyword::SysDate, Keyword::RowNum];

static KEYWORDS: LazyLock<KeywordTable> = LazyLock::new(|| {
    let table = RESERVED_EXTENSIONS
        .iter()
        .fold(KeywordTable::postgres(), |table, &keyword| {
            table.with(keyword, KeywordClass::Reserved)
        });
    debug!(keywords = table.len(), "openGauss keyword table built");
    table
});

/// openGauss dialect.
///
/// Shares the PostgreSQL grammar and precedence table. `MINUS` is a
/// reserved set operator equivalent to `EXCEPT`; `SYSDATE` and `ROWNUM`
/// are reserved pseudo-columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenGaussDialect;

impl OpenGaussDialect {
    /// Creates a new openGauss dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for OpenGaussDialect {
    fn name(&self) -> &'static str {
        "opengauss"
    }

    fn keywords(&self) -> &KeywordTable {
        &KEYWORDS
    }
}

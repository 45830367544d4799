//! SQL dialect support.
//!
//! A dialect supplies the static tables that parameterize the grammar
//! engine: the keyword classification used by the lexer and the operator
//! precedence used by the expression parser. Dialects derived from
//! PostgreSQL share one engine and differ only in these tables.

mod postgres;
mod precedence;

pub use postgres::PostgresDialect;
pub use precedence::{
    Associativity, OperatorClass, PrecedenceLevel, PrecedenceTable, POSTGRES_PRECEDENCE,
};

pub use crate::lexer::KeywordTable;

/// Trait for SQL dialect-specific behavior.
///
/// Implementations hand out references to tables built once per process;
/// they must be cheap to call and safe to share between threads.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the keyword classification table.
    fn keywords(&self) -> &KeywordTable;

    /// Returns the operator precedence table.
    fn precedence(&self) -> &PrecedenceTable {
        &POSTGRES_PRECEDENCE
    }
}

//! # strata-sql-core
//!
//! A grammar engine for the PostgreSQL SQL dialect that turns SQL text into
//! a concrete parse tree.
//!
//! This crate provides:
//! - A lexer driven by per-dialect keyword tables
//! - A hand-written recursive descent parser with Pratt expression parsing
//! - Concrete parse trees with listener and visitor interfaces
//! - Structured diagnostics with positions and expected-token sets
//!
//! ## Parsing
//!
//! ```rust
//! use strata_sql_core::dialect::PostgresDialect;
//! use strata_sql_core::tree::Rule;
//!
//! let result = strata_sql_core::parse(
//!     "SELECT a, count(*) FROM t GROUP BY a",
//!     &PostgresDialect::new(),
//! );
//! let root = result.root().expect("valid SQL");
//! assert_eq!(root.rule(), Rule::Statement);
//! assert!(root.find(|rule| rule == Rule::GroupClause).is_some());
//! ```
//!
//! ## Diagnostics
//!
//! A statement either parses completely or yields errors; a failed parse
//! never exposes a partial tree.
//!
//! ```rust
//! use strata_sql_core::dialect::PostgresDialect;
//! use strata_sql_core::parser::ErrorKind;
//!
//! let result = strata_sql_core::parse("SELECT a FROM", &PostgresDialect::new());
//! let error = &result.errors()[0];
//! assert_eq!(error.kind, ErrorKind::Syntax);
//! assert_eq!(error.line, 1);
//! ```
//!
//! ## Dialects
//!
//! The engine is parameterized by a [`Dialect`](dialect::Dialect), which
//! supplies the keyword table and the precedence table. Dialects derived
//! from PostgreSQL plug their own tables into the same engine.

pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use dialect::{Dialect, PostgresDialect};
pub use lexer::{Keyword, KeywordClass, KeywordTable, Lexer, Token, TokenKind};
pub use parser::{ErrorKind, ParseError, ParseResult, Parser, ParserConfig};
pub use tree::{ParseNode, Rule};

/// Parses one statement with the default configuration.
#[must_use]
pub fn parse(sql: &str, dialect: &dyn Dialect) -> ParseResult {
    Parser::new(sql, dialect).parse_statement()
}

/// Parses a `;`-separated script, one result per non-empty statement.
#[must_use]
pub fn parse_script(sql: &str, dialect: &dyn Dialect) -> Vec<ParseResult> {
    Parser::new(sql, dialect).parse_script()
}

/// Parses one statement with explicit settings.
#[must_use]
pub fn parse_with_config(sql: &str, dialect: &dyn Dialect, config: ParserConfig) -> ParseResult {
    Parser::with_config(sql, dialect, config).parse_statement()
}

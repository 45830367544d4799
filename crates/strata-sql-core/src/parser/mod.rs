//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! Each grammar production is a method on [`Parser`]; the methods are
//! spread over one module per area of the grammar.

mod ddl;
mod disambiguate;
mod dml;
mod error;
mod expr;
mod names;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;
mod result;
mod select;
mod types;
mod utility;

pub use error::{ErrorKind, ErrorReporter, ParseError};
pub use parser::{Parser, ParserConfig, DEFAULT_MAX_DEPTH};
pub use result::ParseResult;

//! # strata-sql-opengauss
//!
//! The openGauss dialect for `strata-sql-core`.
//!
//! # How openGauss differs from PostgreSQL
//!
//! - **`MINUS`**: a reserved word and a set operator with the meaning and
//!   precedence of `EXCEPT`. PostgreSQL reads `minus` as an identifier.
//! - **`SYSDATE`** and **`ROWNUM`**: reserved pseudo-columns. PostgreSQL
//!   reads both as identifiers.
//!
//! Everything else, including the grammar and operator precedence, is the
//! PostgreSQL engine in `strata-sql-core`; only the keyword table differs.
//!
//! ## Example
//!
//! ```rust
//! use strata_sql_core::tree::{Rule, SetOp};
//! use strata_sql_opengauss::OpenGaussDialect;
//!
//! let result = strata_sql_core::parse(
//!     "SELECT id FROM a MINUS SELECT id FROM b",
//!     &OpenGaussDialect::new(),
//! );
//! let root = result.root().expect("valid openGauss SQL");
//! assert!(root
//!     .find(|rule| matches!(rule, Rule::SetOperation { op: SetOp::Minus, .. }))
//!     .is_some());
//! ```

pub mod dialect;

pub use dialect::OpenGaussDialect;

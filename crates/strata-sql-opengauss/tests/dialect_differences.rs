//! Tests for the places where openGauss and PostgreSQL read the same text
//! differently, and for the places where they must agree.

use proptest::prelude::*;
use strata_sql_core::dialect::{Dialect, PostgresDialect};
use strata_sql_core::parser::ErrorKind;
use strata_sql_core::tree::{ParseNode, Rule, SetOp, SpecialFunction};
use strata_sql_core::{parse, ParseResult};
use strata_sql_opengauss::OpenGaussDialect;

fn parse_ok(sql: &str, dialect: &dyn Dialect) -> ParseNode {
    parse(sql, dialect)
        .into_result()
        .unwrap_or_else(|e| panic!("Failed to parse under {}: {sql}\nError: {e:?}", dialect.name()))
}

fn has_rule(result: &ParseResult, rule: Rule) -> bool {
    result
        .root()
        .is_some_and(|root| root.find(|r| r == rule).is_some())
}

// ===================================================================
// MINUS
// ===================================================================

#[test]
fn minus_is_a_set_operator() {
    let root = parse_ok("SELECT a FROM t MINUS SELECT a FROM u", &OpenGaussDialect::new());
    assert!(root
        .find(|r| matches!(r, Rule::SetOperation { op: SetOp::Minus, quantifier: None }))
        .is_some());
}

#[test]
fn minus_binds_like_except() {
    let root = parse_ok(
        "SELECT 1 MINUS SELECT 2 INTERSECT SELECT 3",
        &OpenGaussDialect::new(),
    );
    let top = root
        .find(|r| matches!(r, Rule::SetOperation { .. }))
        .expect("set operation");
    assert!(matches!(top.rule(), Rule::SetOperation { op: SetOp::Minus, .. }));
}

#[test]
fn minus_is_an_alias_in_postgres() {
    let sql = "SELECT a FROM t minus";
    let root = parse_ok(sql, &PostgresDialect::new());
    assert!(root.find(|r| matches!(r, Rule::SetOperation { .. })).is_none());
    assert!(root.find(|r| r == Rule::AliasClause).is_some());

    let result = parse("SELECT a FROM t minus", &OpenGaussDialect::new());
    assert_eq!(result.errors()[0].kind, ErrorKind::Syntax);
}

// ===================================================================
// SYSDATE and ROWNUM
// ===================================================================

#[test]
fn pseudo_columns() {
    let root = parse_ok(
        "SELECT sysdate, rownum FROM t WHERE ROWNUM <= 10",
        &OpenGaussDialect::new(),
    );
    assert_eq!(
        root.find_all(|r| r == Rule::SpecialFunction(SpecialFunction::RowNum))
            .len(),
        2
    );
    assert!(root
        .find(|r| r == Rule::SpecialFunction(SpecialFunction::SysDate))
        .is_some());

    let root = parse_ok(
        "SELECT sysdate, rownum FROM t WHERE ROWNUM <= 10",
        &PostgresDialect::new(),
    );
    assert!(root.find(|r| matches!(r, Rule::SpecialFunction(_))).is_none());
    assert_eq!(root.find_all(|r| r == Rule::ColumnRef).len(), 3);
}

#[test]
fn reserved_pseudo_column_is_not_a_table_name() {
    let result = parse("SELECT * FROM rownum", &OpenGaussDialect::new());
    assert!(!result.is_ok());
    assert!(parse("SELECT * FROM rownum", &PostgresDialect::new()).is_ok());
}

// ===================================================================
// Shared grammar
// ===================================================================

#[test]
fn shared_statements_build_identical_trees() {
    for sql in [
        "SELECT a, b FROM t WHERE a BETWEEN 1 AND 10 ORDER BY b DESC",
        "INSERT INTO t (a) VALUES (1) ON CONFLICT DO NOTHING",
        "UPDATE t SET a = a + 1 WHERE b IS NOT NULL",
        "WITH x AS (SELECT 1) SELECT * FROM x EXCEPT SELECT 2",
    ] {
        let postgres = parse_ok(sql, &PostgresDialect::new());
        let opengauss = parse_ok(sql, &OpenGaussDialect::new());
        assert!(postgres.structurally_eq(&opengauss), "{sql}");
        assert_eq!(postgres, opengauss, "{sql}");
    }
}

#[test]
fn definition_statements_are_shared() {
    for (sql, rule) in [
        ("CREATE TABLE t (id int PRIMARY KEY, v text NOT NULL)", Rule::CreateTableStmt),
        ("CREATE UNIQUE INDEX t_v ON t (v)", Rule::CreateIndexStmt),
        ("ALTER TABLE t ADD COLUMN w int DEFAULT 0", Rule::AlterTableStmt),
        ("TRUNCATE t RESTART IDENTITY", Rule::TruncateStmt),
        ("SET TRANSACTION ISOLATION LEVEL READ COMMITTED", Rule::TransactionModeList),
    ] {
        for dialect in [&PostgresDialect::new() as &dyn Dialect, &OpenGaussDialect::new()] {
            assert!(has_rule(&parse(sql, dialect), rule), "{sql} under {}", dialect.name());
        }
    }
}

#[test]
fn reserved_pseudo_columns_cannot_name_table_columns() {
    let sql = "CREATE TABLE t (rownum int)";
    assert!(has_rule(&parse(sql, &PostgresDialect::new()), Rule::ColumnDef));
    let result = parse(sql, &OpenGaussDialect::new());
    assert!(!has_rule(&result, Rule::ColumnDef));
    assert_eq!(result.errors()[0].kind, ErrorKind::Syntax);
}

proptest! {
    #[test]
    fn plain_identifiers_agree(name in "[a-z][a-z0-9_]{0,10}") {
        prop_assume!(!matches!(name.as_str(), "minus" | "sysdate" | "rownum"));
        let sql = format!("SELECT {name} FROM {name}_t");
        let postgres = parse(&sql, &PostgresDialect::new());
        let opengauss = parse(&sql, &OpenGaussDialect::new());
        prop_assert_eq!(postgres.is_ok(), opengauss.is_ok());
        if let (Some(a), Some(b)) = (postgres.root(), opengauss.root()) {
            prop_assert!(a.structurally_eq(b));
        }
    }
}

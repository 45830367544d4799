//! Tests for parsing `;`-separated scripts.

mod common;
use common::*;

use strata_sql_core::parser::{ErrorKind, ParseResult, Parser};
use strata_sql_core::tree::Rule;

fn script(sql: &str) -> Vec<ParseResult> {
    Parser::new(sql, &POSTGRES).parse_script()
}

fn statement_rules(results: &[ParseResult]) -> Vec<Option<Rule>> {
    results
        .iter()
        .map(|r| r.root().map(|root| statement(root).rule()))
        .collect()
}

#[test]
fn empty_script() {
    assert!(script("").is_empty());
    assert!(script(" ;; -- nothing\n ;").is_empty());
}

#[test]
fn one_result_per_statement() {
    let results = script(
        "SET search_path TO app;\n\
         INSERT INTO t VALUES (1);\n\
         SELECT * FROM t;\n\
         RESET search_path",
    );
    assert_eq!(
        statement_rules(&results),
        vec![
            Some(Rule::VariableSetStmt),
            Some(Rule::InsertStmt),
            Some(Rule::SelectStmt),
            Some(Rule::VariableResetStmt),
        ]
    );
}

#[test]
fn failed_statement_does_not_stop_the_script() {
    let results = script("SELECT 1; SELECT * FROM; DELETE FROM t");
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert_eq!(results[1].errors()[0].kind, ErrorKind::Syntax);
    assert!(results[1].root().is_none());
    assert_eq!(
        results[2].root().map(|root| statement(root).rule()),
        Some(Rule::DeleteStmt)
    );
}

#[test]
fn recovery_skips_semicolons_inside_parentheses() {
    let results = script("SELECT * FROM WHERE f(;); SELECT 2");
    assert_eq!(results.len(), 2);
    assert!(!results[0].is_ok());
    assert!(results[1].is_ok());
}

#[test]
fn missing_separator_is_an_error() {
    let results = script("SELECT 1 SELECT 2");
    assert!(!results[0].is_ok());
    assert_eq!(results[0].errors()[0].found.as_deref(), Some("SELECT"));
}

#[test]
fn lexical_error_ends_the_script() {
    let results = script("SELECT 1; SELECT $$ unterminated; SELECT 3");
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(results[1].errors()[0].kind, ErrorKind::Lexical);
}

#[test]
fn errors_report_script_positions() {
    let results = script("SELECT 1;\nSELECT a FROM;");
    let error = &results[1].errors()[0];
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 14);
}

#[test]
fn statements_match_standalone_parses() {
    let results = script("SELECT a FROM t; UPDATE t SET a = 1");
    let first = results[0].root().expect("first statement");
    assert!(first.structurally_eq(&parse("SELECT a FROM t;")));
    let second = results[1].root().expect("second statement");
    assert!(second.structurally_eq(&parse("UPDATE t SET a = 1")));
}

#[test]
fn crate_level_script_entry() {
    let results = strata_sql_core::parse_script(
        "CREATE TABLE t (a int);\n\
         SET TRANSACTION ISOLATION LEVEL SERIALIZABLE;\n\
         SELECT 42::int FROM t;",
        &POSTGRES,
    );
    assert_eq!(
        statement_rules(&results),
        vec![
            Some(Rule::CreateTableStmt),
            Some(Rule::VariableSetStmt),
            Some(Rule::SelectStmt),
        ]
    );
    let cast = results[2].root().expect("select").find(|r| r == Rule::TypeCast).expect("cast");
    assert_eq!(cast.text(), "42 :: int");
}

#![allow(dead_code)]

use strata_sql_core::dialect::PostgresDialect;
use strata_sql_core::parser::{ParseError, Parser, ParserConfig};
use strata_sql_core::tree::{Child, ParseNode, Rule};

pub static POSTGRES: PostgresDialect = PostgresDialect::new();

pub fn parse(sql: &str) -> ParseNode {
    Parser::new(sql, &POSTGRES)
        .parse_statement()
        .into_result()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    let result = Parser::new(sql, &POSTGRES).parse_statement();
    assert!(!result.is_ok(), "Expected parse error for: {sql}");
    result.errors()[0].clone()
}

pub fn parse_err_with_depth(sql: &str, max_depth: usize) -> ParseError {
    let config = ParserConfig::default().with_max_depth(max_depth);
    let result = Parser::with_config(sql, &POSTGRES, config).parse_statement();
    assert!(!result.is_ok(), "Expected parse error for: {sql}");
    result.errors()[0].clone()
}

pub fn parse_expr(sql: &str) -> ParseNode {
    Parser::new(sql, &POSTGRES)
        .parse_expression()
        .into_result()
        .unwrap_or_else(|e| panic!("Failed to parse expression: {sql}\nError: {e:?}"))
}

pub fn parse_expr_err(sql: &str) -> ParseError {
    let result = Parser::new(sql, &POSTGRES).parse_expression();
    assert!(!result.is_ok(), "Expected parse error for: {sql}");
    result.errors()[0].clone()
}

/// The statement node under the `Statement` root.
pub fn statement(root: &ParseNode) -> &ParseNode {
    root.child_nodes()
        .next()
        .unwrap_or_else(|| panic!("Empty statement: {}", root.to_sexp()))
}

pub fn find<'a>(root: &'a ParseNode, rule: Rule) -> &'a ParseNode {
    root.find(|r| r == rule)
        .unwrap_or_else(|| panic!("No {rule:?} in {}", root.to_sexp()))
}

pub fn count(root: &ParseNode, rule: Rule) -> usize {
    root.find_all(|r| r == rule).len()
}

pub fn has(root: &ParseNode, rule: Rule) -> bool {
    root.find(|r| r == rule).is_some()
}

/// Renders an expression with explicit grouping, e.g. `(a + (b * c))`.
pub fn grouping(node: &ParseNode) -> String {
    match node.rule() {
        Rule::Expr(_) | Rule::TypeCast => {
            let parts: Vec<String> = node
                .children()
                .iter()
                .map(|child| match child {
                    Child::Node(n) => grouping(n),
                    Child::Token(t) => t.text.clone(),
                })
                .collect();
            format!("({})", parts.join(" "))
        }
        _ => node.text(),
    }
}

pub fn parens(sql: &str) -> String {
    grouping(&parse_expr(sql))
}

/// Verifies that the token text of a tree parses back into the same
/// tree.
pub fn round_trip(sql: &str) {
    let first = parse(sql);
    let rendered = first.text();
    let second = parse(&rendered);
    assert!(
        first.structurally_eq(&second),
        "Round-trip failed.\n  Input:    {sql}\n  Rendered: {rendered}\n  First:    {}\n  Second:   {}",
        first.to_sexp(),
        second.to_sexp()
    );
}

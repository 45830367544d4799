//! Tests for parser error cases.

mod common;
use common::*;

use strata_sql_core::parser::{ErrorKind, Parser, ParserConfig, DEFAULT_MAX_DEPTH};

// ===================================================================
// Syntax errors
// ===================================================================

#[test]
fn error_empty_input() {
    let error = parse_err("");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(error.found.as_deref(), Some(""));
    assert!(error.message.contains("end of input"));
}

#[test]
fn error_unknown_statement() {
    let error = parse_err("VACUUM users");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(error.found.as_deref(), Some("VACUUM"));
    assert!(error.expected.contains(&"SELECT".to_string()));
    assert!(error.expected.contains(&"CREATE".to_string()));
    assert!(error.expected.contains(&"TRUNCATE".to_string()));
}

#[test]
fn error_reserved_word_as_expression() {
    let error = parse_expr_err("SELECT");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(error.found.as_deref(), Some("SELECT"));
    assert!(error.expected.contains(&"identifier".to_string()));
    assert!(error.expected.contains(&"column-name keyword".to_string()));
}

#[test]
fn error_reserved_word_in_select_list() {
    let result = Parser::new("SELECT a, FROM t", &POSTGRES).parse_statement();
    assert_eq!(result.errors().len(), 1);
    let error = &result.errors()[0];
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(error.found.as_deref(), Some("FROM"));
    assert!(error.expected.contains(&"identifier".to_string()));
}

#[test]
fn error_missing_from_table() {
    let error = parse_err("SELECT * FROM");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert!(error.message.contains("end of input"));
}

#[test]
fn error_unclosed_paren() {
    let error = parse_err("SELECT (1 + 2");
    assert!(error.expected.contains(&"')'".to_string()));
}

#[test]
fn error_join_without_on_or_using() {
    let error = parse_err("SELECT * FROM a INNER JOIN b WHERE a.id = 1");
    assert_eq!(error.found.as_deref(), Some("WHERE"));
    assert!(error.expected.contains(&"ON".to_string()));
    assert!(error.expected.contains(&"USING".to_string()));
}

#[test]
fn error_trailing_input() {
    let error = parse_err("SELECT 1 2");
    assert_eq!(error.found.as_deref(), Some("2"));
}

#[test]
fn error_ambiguous_parentheses() {
    let error = parse_err("SELECT ()");
    assert_eq!(error.kind, ErrorKind::AmbiguityExhausted);
}

#[test]
fn failed_parse_has_no_tree() {
    let result = Parser::new("SELECT * FROM WHERE", &POSTGRES).parse_statement();
    assert!(!result.is_ok());
    assert!(result.root().is_none());
    let errors = result.into_result().expect_err("parse should fail");
    assert_eq!(errors.len(), 1);
}

// ===================================================================
// Lexical errors
// ===================================================================

#[test]
fn lexical_error_unterminated_string() {
    let error = parse_err("SELECT 'open");
    assert_eq!(error.kind, ErrorKind::Lexical);
    assert_eq!(error.span.start, 7);
    assert_eq!((error.line, error.column), (1, 8));
}

#[test]
fn lexical_error_unknown_character() {
    let error = parse_err("SELECT a FROM t WHERE {");
    assert_eq!(error.kind, ErrorKind::Lexical);
    assert_eq!(error.span.start, 22);
}

#[test]
fn earlier_syntax_error_beats_later_lexical_error() {
    let error = parse_err("SELECT FROM WHERE 'x");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(error.found.as_deref(), Some("WHERE"));
}

// ===================================================================
// Depth ceiling
// ===================================================================

#[test]
fn nested_parentheses_beyond_ceiling() {
    let sql = format!("SELECT {}1{}", "(".repeat(200), ")".repeat(200));
    let result = Parser::new(&sql, &POSTGRES).parse_statement();
    assert_eq!(result.errors().len(), 1);
    let error = &result.errors()[0];
    assert_eq!(error.kind, ErrorKind::DepthExceeded);
    assert!(error.message.contains(&DEFAULT_MAX_DEPTH.to_string()));
}

#[test]
fn pathological_nesting_does_not_overflow() {
    let sql = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let error = parse_expr_err(&sql);
    assert_eq!(error.kind, ErrorKind::DepthExceeded);

    let sql = format!("SELECT {}1", "NOT ".repeat(100_000));
    assert_eq!(parse_err(&sql).kind, ErrorKind::DepthExceeded);
}

#[test]
fn nested_subqueries_beyond_ceiling() {
    let sql = format!(
        "SELECT * FROM {}SELECT 1{} AS s",
        "(".repeat(10),
        ")".repeat(10)
    );
    assert_eq!(parse_err_with_depth(&sql, 4).kind, ErrorKind::DepthExceeded);
    let root = parse(&sql);
    assert!(has(&root, strata_sql_core::tree::Rule::SelectWithParens));
}

#[test]
fn ceiling_is_configurable() {
    let sql = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    let config = ParserConfig::default().with_max_depth(8);
    let result = Parser::with_config(&sql, &POSTGRES, config).parse_expression();
    assert_eq!(result.errors()[0].kind, ErrorKind::DepthExceeded);

    let config = ParserConfig::default().with_max_depth(128);
    assert!(Parser::with_config(&sql, &POSTGRES, config)
        .parse_expression()
        .is_ok());
}

#[test]
fn long_operator_chains_are_not_nesting() {
    let sql = vec!["x"; 10_000].join(" + ");
    let root = parse_expr(&sql);
    assert_eq!(root.tokens().len(), 19_999);
}

// ===================================================================
// Positions and reporting
// ===================================================================

#[test]
fn error_line_and_column() {
    let error = parse_err("SELECT a\nFROM t\nWHERE");
    assert_eq!(error.span.start, 21);
    assert_eq!((error.line, error.column), (3, 6));
}

#[test]
fn error_column_counts_characters() {
    let error = parse_err("SELECT 'é', FROM t");
    assert_eq!(error.span.start, 13);
    assert_eq!((error.line, error.column), (1, 13));
}

#[test]
fn error_display() {
    let error = parse_err("SELECT * FROM t WHERE");
    let text = error.to_string();
    assert!(text.starts_with("syntax error at line 1, column 22: "), "{text}");

    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert!(boxed.to_string().contains("end of input"));
}

#[test]
fn error_serializes_to_json() {
    let error = parse_err("SELECT a FROM t WHERE");
    let json = serde_json::to_value(&error).expect("serializable");
    assert_eq!(json["kind"], "Syntax");
    assert_eq!(json["line"], 1);
    assert_eq!(json["found"], "");
    assert!(json["expected"].is_array());
    assert_eq!(json["span"]["start"], 21);
}

#[test]
fn config_from_json() {
    let config: ParserConfig = serde_json::from_str(r#"{"max_depth": 3}"#).expect("valid config");
    let result = Parser::with_config("((((1))))", &POSTGRES, config).parse_expression();
    assert_eq!(result.errors()[0].kind, ErrorKind::DepthExceeded);
}

//! Property tests over generated SQL.

mod common;
use common::*;

use proptest::prelude::*;
use proptest::sample::select;
use strata_sql_core::lexer::KeywordClass;
use strata_sql_core::parser::Parser;
use strata_sql_core::tree::Rule;
use strata_sql_core::Dialect;

const ARITHMETIC: &[&str] = &["+", "-", "*", "/", "%", "^", "||"];
const COMPARISON: &[&str] = &["=", "<>", "<", "<=", ">", ">="];
const BOOLEAN: &[&str] = &["AND", "OR"];
const CAST_TARGETS: &[&str] = &["int", "numeric", "text", "bigint"];
const SEPARATORS: &[&str] = &[" ", "  ", "\n", "\t", " /* note */ ", " -- note\n"];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}".prop_filter("keywords are not plain identifiers", |word| {
        POSTGRES.keywords().lookup(word).is_none()
    })
}

fn leaf() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        "[0-9]{1,4}".prop_map(|n| vec![n]),
        "[0-9]{1,3}\\.[0-9]{1,3}".prop_map(|n| vec![n]),
        identifier().prop_map(|name| vec![name]),
        "'[a-z ]{0,6}'".prop_map(|s| vec![s]),
    ]
}

fn group(parts: impl IntoIterator<Item = Vec<String>>) -> Vec<String> {
    parts.into_iter().flatten().collect()
}

fn word(text: &str) -> Vec<String> {
    vec![text.to_string()]
}

/// Expressions as token lists. Comparisons are parenthesized since they do
/// not chain.
fn expression() -> impl Strategy<Value = Vec<String>> {
    leaf().prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), select(ARITHMETIC), inner.clone())
                .prop_map(|(l, op, r)| group([l, word(op), r])),
            (inner.clone(), select(COMPARISON), inner.clone())
                .prop_map(|(l, op, r)| group([word("("), l, word(op), r, word(")")])),
            (inner.clone(), select(BOOLEAN), inner.clone())
                .prop_map(|(l, op, r)| group([l, word(op), r])),
            inner
                .clone()
                .prop_map(|e| group([word("("), e, word(")")])),
            inner.clone().prop_map(|e| group([word("-"), e])),
            inner
                .clone()
                .prop_map(|e| group([word("("), word("NOT"), e, word(")")])),
            inner
                .clone()
                .prop_map(|e| group([e, word("::"), word("int")])),
            (inner.clone(), inner.clone(), inner)
                .prop_map(|(x, lo, hi)| group([
                    word("("),
                    x,
                    word("BETWEEN"),
                    word("("),
                    lo,
                    word(")"),
                    word("AND"),
                    word("("),
                    hi,
                    word(")"),
                    word(")"),
                ])),
        ]
    })
}

/// `SELECT .. FROM .. WHERE .. ORDER BY ..` as a token list.
fn select_statement() -> impl Strategy<Value = Vec<String>> {
    (expression(), identifier(), expression(), expression()).prop_map(|(target, table, filter, key)| {
        group([
            word("SELECT"),
            target,
            word("FROM"),
            vec![table],
            word("WHERE"),
            filter,
            word("ORDER"),
            word("BY"),
            key,
        ])
    })
}

/// Joins tokens with single spaces, except around `::`.
fn glue_casts(tokens: &[String]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && token != "::" && tokens[i - 1] != "::" {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Joins tokens, cycling through `separators`.
fn spread(tokens: &[String], separators: &[&str]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(separators[(i - 1) % separators.len()]);
        }
        out.push_str(token);
    }
    out
}

fn keywords_where(pred: fn(KeywordClass) -> bool) -> Vec<String> {
    let mut words: Vec<String> = POSTGRES
        .keywords()
        .iter()
        .filter(|&(_, class)| pred(class))
        .map(|(keyword, _)| keyword.as_str().to_lowercase())
        .collect();
    words.sort();
    words
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_expressions_parse(tokens in expression()) {
        let sql = tokens.join(" ");
        let result = Parser::new(&sql, &POSTGRES).parse_expression();
        prop_assert!(result.is_ok(), "{sql}: {:?}", result.errors());
    }

    #[test]
    fn expression_text_round_trips(tokens in expression()) {
        let sql = tokens.join(" ");
        let root = parse_expr(&sql);
        prop_assert_eq!(root.text(), sql.clone());
        prop_assert!(root.structurally_eq(&parse_expr(&root.text())));
    }

    #[test]
    fn whitespace_does_not_change_structure(
        tokens in expression(),
        separators in proptest::collection::vec(select(SEPARATORS), 1..8),
    ) {
        let compact = parse_expr(&tokens.join(" "));
        let spaced = parse_expr(&spread(&tokens, &separators));
        prop_assert!(compact.structurally_eq(&spaced));
    }

    #[test]
    fn adjacent_casts_match_spaced_casts(tokens in expression()) {
        let spaced = parse_expr(&tokens.join(" "));
        let compact = parse_expr(&glue_casts(&tokens));
        prop_assert!(compact.structurally_eq(&spaced));
        prop_assert_eq!(compact.text(), spaced.text());
    }

    #[test]
    fn literal_casts_ignore_spacing(
        literal in prop_oneof!["[0-9]{1,4}", "[0-9]{1,3}\\.[0-9]{1,3}"],
        target in select(CAST_TARGETS),
    ) {
        let compact = parse_expr(&format!("{literal}::{target}"));
        let spaced = parse_expr(&format!("{literal} :: {target}"));
        prop_assert!(compact.structurally_eq(&spaced));
        prop_assert_eq!(compact.text(), format!("{literal} :: {target}"));
    }

    #[test]
    fn statement_text_round_trips(tokens in select_statement()) {
        let sql = tokens.join(" ");
        let root = parse(&sql);
        prop_assert_eq!(root.text(), sql.clone());
        prop_assert!(root.structurally_eq(&parse(&root.text())));
    }

    #[test]
    fn whitespace_does_not_change_statements(
        tokens in select_statement(),
        separators in proptest::collection::vec(select(SEPARATORS), 1..8),
    ) {
        let compact = parse(&glue_casts(&tokens));
        let spaced = parse(&spread(&tokens, &separators));
        prop_assert!(compact.structurally_eq(&spaced));
    }

    #[test]
    fn scripts_yield_one_result_per_statement(
        statements in proptest::collection::vec(select_statement(), 1..5),
        trailing in any::<bool>(),
    ) {
        let mut sql = statements.iter().map(|tokens| tokens.join(" ")).collect::<Vec<_>>().join(";\n");
        if trailing {
            sql.push(';');
        }
        let results = Parser::new(&sql, &POSTGRES).parse_script();
        prop_assert_eq!(results.len(), statements.len());
        for (result, tokens) in results.iter().zip(&statements) {
            prop_assert!(result.is_ok(), "{sql}: {:?}", result.errors());
            let root = result.root().expect("statement tree");
            prop_assert!(root.text().starts_with(&tokens.join(" ")));
        }
    }

    #[test]
    fn parsing_is_deterministic(tokens in expression(), table in identifier()) {
        let sql = format!("SELECT {} AS v FROM {table} WHERE true", tokens.join(" "));
        prop_assert_eq!(parse(&sql), parse(&sql));
    }

    #[test]
    fn expressions_in_a_select_list(tokens in expression(), alias in identifier()) {
        let sql = format!("SELECT {}, 1 AS {alias}", tokens.join(" "));
        let root = parse(&sql);
        prop_assert_eq!(count(&root, Rule::TargetEl), 2);
    }

    #[test]
    fn column_keywords_name_columns(
        column in select(keywords_where(KeywordClass::is_col_id)),
    ) {
        let sql = format!("INSERT INTO t ({column}) VALUES (1)");
        let root = parse(&sql);
        prop_assert!(has(&root, Rule::InsertColumnList));
    }

    #[test]
    fn reserved_keywords_do_not_name_columns(
        column in select(keywords_where(|class| class == KeywordClass::Reserved)),
    ) {
        let sql = format!("INSERT INTO t ({column}) VALUES (1)");
        let result = Parser::new(&sql, &POSTGRES).parse_statement();
        prop_assert!(!result.is_ok(), "{sql}");
    }

    #[test]
    fn any_keyword_is_a_label(label in select(keywords_where(|_| true))) {
        let sql = format!("SELECT 1 AS {label}");
        let root = parse(&sql);
        prop_assert_eq!(count(&root, Rule::ColumnAlias), 1);
    }

    #[test]
    fn arbitrary_input_never_panics(sql in "[a-zA-Z0-9 ,()*+<>=';.$:_\n-]{0,64}") {
        for result in Parser::new(&sql, &POSTGRES).parse_script() {
            match result.root() {
                Some(root) => {
                    prop_assert_eq!(root.rule(), Rule::Statement);
                }
                None => {
                    prop_assert!(result.errors().iter().all(|e| e.line >= 1 && e.column >= 1));
                }
            }
        }
    }
}

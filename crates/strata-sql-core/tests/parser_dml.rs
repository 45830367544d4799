//! Tests for INSERT, UPDATE and DELETE statements.

mod common;
use common::*;

use strata_sql_core::parser::ErrorKind;
use strata_sql_core::tree::{ConflictActionKind, ParseNode, Rule};

// ===================================================================
// INSERT
// ===================================================================

#[test]
fn insert_values() {
    let root = parse("INSERT INTO users (id, name) VALUES (1, 'alice'), (2, 'bob')");
    let stmt = statement(&root);
    assert_eq!(stmt.rule(), Rule::InsertStmt);
    assert_eq!(count(&root, Rule::ValuesRow), 2);
    let columns = find(&root, Rule::InsertColumnList);
    assert_eq!(columns.child_nodes().count(), 2);
}

#[test]
fn insert_from_select() {
    let root = parse("INSERT INTO archive SELECT * FROM users WHERE active = false");
    let insert = statement(&root);
    let children: Vec<Rule> = insert.child_nodes().map(ParseNode::rule).collect();
    assert_eq!(children, vec![Rule::InsertTarget, Rule::SelectStmt]);
}

#[test]
fn insert_parenthesized_query_is_not_a_column_list() {
    let root = parse("INSERT INTO t (SELECT 1)");
    assert!(!has(&root, Rule::InsertColumnList));

    let root = parse("INSERT INTO t (a) (SELECT 1)");
    assert!(has(&root, Rule::InsertColumnList));
    assert!(has(&root, Rule::SelectWithParens));
}

#[test]
fn insert_ambiguous_parenthesis() {
    let error = parse_err("INSERT INTO t (1)");
    assert_eq!(error.kind, ErrorKind::AmbiguityExhausted);
    assert_eq!(error.found.as_deref(), Some("1"));
}

#[test]
fn insert_with_defaults_and_returning() {
    let root = parse("INSERT INTO t VALUES (DEFAULT, now()) RETURNING id AS new_id, *");
    assert!(has(&root, Rule::DefaultExpr));
    let returning = find(&root, Rule::ReturningClause);
    assert_eq!(count(returning, Rule::TargetEl), 2);
}

#[test]
fn insert_on_conflict() {
    let root = parse(
        "INSERT INTO counters (key, n) VALUES ('a', 1) \
         ON CONFLICT (key) DO UPDATE SET n = counters.n + excluded.n",
    );
    let conflict = find(&root, Rule::OnConflict);
    assert!(conflict.child(Rule::ConflictTarget).is_some());
    assert!(has(conflict, Rule::ConflictAction(ConflictActionKind::Update)));

    let root = parse("INSERT INTO t VALUES (1) ON CONFLICT DO NOTHING");
    let conflict = find(&root, Rule::OnConflict);
    assert!(conflict.child(Rule::ConflictTarget).is_none());
    assert!(has(conflict, Rule::ConflictAction(ConflictActionKind::Nothing)));
}

#[test]
fn insert_column_rejects_reserved_keyword() {
    let error = parse_err("INSERT INTO t (SELECT) VALUES (1)");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(error.found.as_deref(), Some("SELECT"));
    assert!(error.expected.contains(&"identifier".to_string()));
}

// ===================================================================
// UPDATE
// ===================================================================

#[test]
fn update_assignments() {
    let root = parse("UPDATE accounts SET balance = balance - 10, (a, b) = (1, 2) WHERE id = $1");
    let stmt = statement(&root);
    assert_eq!(stmt.rule(), Rule::UpdateStmt);
    let list = find(&root, Rule::SetClauseList);
    assert_eq!(list.child_nodes().count(), 2);
    assert!(has(list, Rule::SetTargetList));
    assert!(has(&root, Rule::Param));
}

#[test]
fn update_multi_column_from_subquery() {
    let root = parse("UPDATE t SET (a, b) = (SELECT x, y FROM u WHERE u.id = t.id)");
    assert!(has(&root, Rule::SetTargetList));
    assert!(has(&root, Rule::ScalarSubquery));
}

#[test]
fn update_with_from_and_alias() {
    let root = parse("UPDATE t AS x SET a = u.a FROM u WHERE x.id = u.id");
    let update = statement(&root);
    assert!(update.child(Rule::AliasClause).is_some());
    assert!(update.child(Rule::FromClause).is_some());
    assert!(update.child(Rule::WhereClause).is_some());
}

#[test]
fn update_set_is_not_an_alias() {
    let root = parse("UPDATE t SET a = 1");
    assert!(!has(&root, Rule::AliasClause));
}

#[test]
fn update_requires_set() {
    let error = parse_err("UPDATE t WHERE a = 1");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert!(error.expected.contains(&"SET".to_string()));
}

// ===================================================================
// DELETE
// ===================================================================

#[test]
fn delete_forms() {
    let root = parse("DELETE FROM t WHERE a = 1");
    assert_eq!(statement(&root).rule(), Rule::DeleteStmt);

    let root = parse("DELETE FROM ONLY t AS x USING u WHERE x.id = u.id RETURNING x.id");
    let delete = statement(&root);
    assert!(delete.child(Rule::UsingClause).is_some());
    assert!(delete.child(Rule::ReturningClause).is_some());

    let root = parse("DELETE FROM t WHERE CURRENT OF cur");
    assert!(has(&root, Rule::CurrentOf));
}

// ===================================================================
// WITH
// ===================================================================

#[test]
fn with_clause_attaches_to_dml() {
    for (sql, rule) in [
        ("WITH s AS (SELECT 1) INSERT INTO t SELECT * FROM s", Rule::InsertStmt),
        ("WITH s AS (SELECT 1) UPDATE t SET a = 1", Rule::UpdateStmt),
        ("WITH s AS (SELECT 1) DELETE FROM t", Rule::DeleteStmt),
    ] {
        let root = parse(sql);
        let stmt = statement(&root);
        assert_eq!(stmt.rule(), rule, "{sql}");
        assert_eq!(
            stmt.child_nodes().next().map(ParseNode::rule),
            Some(Rule::WithClause),
            "{sql}"
        );
    }
}

#[test]
fn data_modifying_cte() {
    let root = parse(
        "WITH moved AS (DELETE FROM queue WHERE done RETURNING *) \
         INSERT INTO history SELECT * FROM moved",
    );
    assert_eq!(statement(&root).rule(), Rule::InsertStmt);
    let cte = find(&root, Rule::CommonTableExpr);
    assert!(has(cte, Rule::DeleteStmt));
}

#[test]
fn dml_round_trips() {
    for sql in [
        "INSERT INTO t (a, b) VALUES (1, 2) ON CONFLICT (a) WHERE b > 0 DO UPDATE SET b = excluded.b",
        "INSERT INTO t AS x DEFAULT VALUES RETURNING x.*",
        "UPDATE t SET a[1] = 2, b.c = 3 WHERE d IS DISTINCT FROM e",
        "DELETE FROM t USING u WHERE t.id = u.id RETURNING *",
        "WITH a AS (SELECT 1) DELETE FROM t WHERE id IN (SELECT * FROM a)",
    ] {
        round_trip(sql);
    }
}

//! Tests for data definition statements: CREATE, ALTER and DROP of tables,
//! indexes, views and databases, and TRUNCATE.

mod common;
use common::*;

use strata_sql_core::parser::{ErrorKind, Parser};
use strata_sql_core::tree::{ParseNode, Rule};

#[test]
fn statement_kinds() {
    let cases = [
        ("CREATE TABLE t (a int)", Rule::CreateTableStmt),
        ("CREATE INDEX i ON t (a)", Rule::CreateIndexStmt),
        ("CREATE VIEW v AS SELECT 1", Rule::CreateViewStmt),
        ("CREATE DATABASE d", Rule::CreateDatabaseStmt),
        ("ALTER TABLE t DROP COLUMN a", Rule::AlterTableStmt),
        ("ALTER INDEX i SET TABLESPACE fast", Rule::AlterIndexStmt),
        ("DROP TABLE t", Rule::DropTableStmt),
        ("DROP INDEX i", Rule::DropIndexStmt),
        ("DROP VIEW v", Rule::DropViewStmt),
        ("DROP DATABASE d", Rule::DropDatabaseStmt),
        ("TRUNCATE t", Rule::TruncateStmt),
    ];
    for (sql, rule) in cases {
        let root = parse(sql);
        let stmt = statement(&root);
        assert_eq!(stmt.rule(), rule, "{sql}");
        assert!(stmt.rule().is_statement(), "{sql}");
    }
}

// ===================================================================
// CREATE TABLE
// ===================================================================

#[test]
fn create_table_columns_and_constraints() {
    let root = parse(
        "CREATE TABLE IF NOT EXISTS app.users (\
           id bigint GENERATED ALWAYS AS IDENTITY PRIMARY KEY, \
           email varchar(255) NOT NULL UNIQUE, \
           team_id int REFERENCES teams (id) ON DELETE SET NULL ON UPDATE CASCADE, \
           score numeric(5, 2) DEFAULT 0 CHECK (score >= 0), \
           name text COLLATE \"C\", \
           CONSTRAINT users_team_email UNIQUE (team_id, email) DEFERRABLE INITIALLY IMMEDIATE, \
           FOREIGN KEY (team_id) REFERENCES teams MATCH FULL\
         )",
    );
    let elements = find(&root, Rule::TableElementList);
    let kinds: Vec<Rule> = elements.child_nodes().map(ParseNode::rule).collect();
    assert_eq!(
        kinds,
        vec![
            Rule::ColumnDef,
            Rule::ColumnDef,
            Rule::ColumnDef,
            Rule::ColumnDef,
            Rule::ColumnDef,
            Rule::TableConstraint,
            Rule::TableConstraint,
        ]
    );
    assert_eq!(count(&root, Rule::ColConstraint), 8);
    assert_eq!(count(&root, Rule::KeyAction), 2);
    assert_eq!(count(&root, Rule::ReferencesClause), 2);
    assert_eq!(count(&root, Rule::ConstraintAttr), 2);

    let first = elements.child_nodes().next().expect("column");
    assert_eq!(first.text(), "id bigint GENERATED ALWAYS AS IDENTITY PRIMARY KEY");
}

#[test]
fn create_table_options() {
    let root = parse(
        "CREATE UNLOGGED TABLE measurements (city_id int, logdate date) \
         PARTITION BY RANGE (logdate) WITH (fillfactor = 70, autovacuum_enabled = false) \
         TABLESPACE fast",
    );
    assert!(has(&root, Rule::PartitionSpec));
    assert_eq!(count(&root, Rule::RelOption), 2);

    let root = parse("CREATE TEMP TABLE scratch (LIKE users INCLUDING ALL) ON COMMIT DROP");
    assert!(has(&root, Rule::TableLikeClause));
    assert_eq!(find(&root, Rule::OnCommitClause).text(), "ON COMMIT DROP");

    let root = parse("CREATE TABLE child (extra text) INHERITS (parent, other.parent)");
    assert_eq!(count(find(&root, Rule::InheritClause), Rule::QualifiedName), 2);

    let root = parse("CREATE TABLE empty ()");
    assert_eq!(find(&root, Rule::TableElementList).child_nodes().count(), 0);
}

#[test]
fn create_table_as_query() {
    let root = parse("CREATE TABLE recent AS SELECT * FROM events WHERE ts > now() - INTERVAL '1 day'");
    assert!(!has(&root, Rule::TableElementList));
    assert!(has(&root, Rule::SelectStmt));

    let root = parse("CREATE TABLE copy (a, b) AS TABLE source WITH DATA");
    assert_eq!(find(&root, Rule::NameList).text(), "a , b");
}

#[test]
fn create_table_errors() {
    let error = parse_err("CREATE TABLE t (a)");
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert!(error.expected.contains(&"AS".to_string()));

    let error = parse_err("CREATE TABLE t (a int,)");
    assert_eq!(error.found.as_deref(), Some(")"));

    let error = parse_err("CREATE TABLE t (a int CHECK a > 0)");
    assert_eq!(error.found.as_deref(), Some("a"));
    assert!(error.expected.contains(&"'('".to_string()));

    let error = parse_err("CREATE TABLE t (a int REFERENCES p ON DELETE NOTHING)");
    assert!(error.expected.contains(&"CASCADE".to_string()));

    let error = parse_err("CREATE GLOBAL TABLE t (a int)");
    assert!(error.expected.contains(&"TEMP".to_string()));
}

// ===================================================================
// CREATE INDEX, VIEW, DATABASE
// ===================================================================

#[test]
fn create_index_forms() {
    let root = parse(
        "CREATE UNIQUE INDEX CONCURRENTLY IF NOT EXISTS users_email \
         ON ONLY users USING btree (lower(email) DESC NULLS LAST, (id + 1), team_id) \
         INCLUDE (name) WITH (fillfactor = 90) WHERE deleted_at IS NULL",
    );
    assert_eq!(count(find(&root, Rule::IndexParams), Rule::IndexElem), 3);
    assert!(has(&root, Rule::IncludeClause));
    assert!(has(&root, Rule::WhereClause));

    let root = parse("CREATE INDEX ON t (a)");
    assert_eq!(find(&root, Rule::RelationExpr).text(), "t");
}

#[test]
fn create_view_forms() {
    let root = parse(
        "CREATE OR REPLACE RECURSIVE VIEW tree (id, parent) WITH (security_barrier) \
         AS SELECT id, parent FROM nodes WITH LOCAL CHECK OPTION",
    );
    assert!(has(&root, Rule::RelOptions));
    assert_eq!(find(&root, Rule::ViewCheckOption).text(), "WITH LOCAL CHECK OPTION");

    let error = parse_err("CREATE VIEW v SELECT 1");
    assert!(error.expected.contains(&"AS".to_string()));
}

#[test]
fn create_database_options() {
    let root = parse(
        "CREATE DATABASE sales WITH OWNER = admin TEMPLATE template0 \
         ENCODING 'UTF8' CONNECTION LIMIT = -1 TABLESPACE DEFAULT",
    );
    assert_eq!(count(&root, Rule::CreatedbOption), 5);
}

// ===================================================================
// ALTER
// ===================================================================

#[test]
fn alter_table_actions() {
    let root = parse(
        "ALTER TABLE IF EXISTS ONLY users \
         ADD COLUMN IF NOT EXISTS age int CHECK (age > 0), \
         ADD CONSTRAINT users_pk PRIMARY KEY (id), \
         DROP COLUMN legacy CASCADE, \
         ALTER COLUMN name SET DATA TYPE varchar(100) USING name::varchar(100), \
         ALTER email SET NOT NULL, \
         ALTER score DROP DEFAULT, \
         OWNER TO CURRENT_USER, \
         SET (fillfactor = 50), \
         VALIDATE CONSTRAINT users_pk",
    );
    assert_eq!(count(&root, Rule::AlterTableCmd), 9);
    assert!(has(&root, Rule::TableConstraint));
}

#[test]
fn alter_table_single_actions() {
    for sql in [
        "ALTER TABLE t RENAME TO u",
        "ALTER TABLE t RENAME COLUMN a TO b",
        "ALTER TABLE t RENAME CONSTRAINT c TO d",
        "ALTER TABLE t SET SCHEMA archive",
    ] {
        let root = parse(sql);
        assert_eq!(count(&root, Rule::AlterTableCmd), 1, "{sql}");
    }
    let error = parse_err("ALTER TABLE t RENAME TO u, ADD COLUMN x int");
    assert_eq!(error.found.as_deref(), Some(","));
}

#[test]
fn alter_index_actions() {
    for sql in [
        "ALTER INDEX IF EXISTS i RENAME TO j",
        "ALTER INDEX i SET (fillfactor = 75)",
        "ALTER INDEX i RESET (fillfactor)",
        "ALTER INDEX i NO DEPENDS ON EXTENSION ext",
        "ALTER INDEX i ATTACH PARTITION part_i",
        "ALTER INDEX i ALTER COLUMN 2 SET STATISTICS 100",
    ] {
        assert_eq!(statement(&parse(sql)).rule(), Rule::AlterIndexStmt, "{sql}");
    }
    let error = parse_err("ALTER INDEX i DROP COLUMN a");
    assert!(error.expected.contains(&"RENAME".to_string()));
}

// ===================================================================
// DROP and TRUNCATE
// ===================================================================

#[test]
fn drop_statements() {
    let root = parse("DROP TABLE IF EXISTS a, s.b CASCADE");
    assert_eq!(count(&root, Rule::QualifiedName), 2);

    for sql in [
        "DROP INDEX CONCURRENTLY IF EXISTS i RESTRICT",
        "DROP VIEW v",
        "DROP DATABASE IF EXISTS d WITH (FORCE)",
        "DROP DATABASE d (FORCE)",
    ] {
        let result = Parser::new(sql, &POSTGRES).parse_statement();
        assert!(result.is_ok(), "{sql}: {:?}", result.errors());
    }

    let error = parse_err("DROP SCHEMA s");
    assert_eq!(error.found.as_deref(), Some("SCHEMA"));
    assert!(error.expected.contains(&"TABLE".to_string()));
}

#[test]
fn truncate_forms() {
    let root = parse("TRUNCATE TABLE ONLY a, b * RESTART IDENTITY CASCADE");
    assert_eq!(count(&root, Rule::RelationExpr), 2);

    let root = parse("truncate events continue identity");
    assert_eq!(statement(&root).rule(), Rule::TruncateStmt);

    let error = parse_err("TRUNCATE t RESTART");
    assert!(error.expected.contains(&"IDENTITY".to_string()));
}

#[test]
fn definition_round_trips() {
    for sql in [
        "CREATE TABLE t (a int NOT NULL DEFAULT 1, b text, PRIMARY KEY (a))",
        "CREATE INDEX i ON t USING gin (doc)",
        "CREATE VIEW v (x) AS SELECT 1",
        "ALTER TABLE t ALTER COLUMN a TYPE bigint",
        "DROP INDEX i",
        "TRUNCATE a, b",
    ] {
        round_trip(sql);
    }
}

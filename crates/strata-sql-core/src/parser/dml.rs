//! Preparable statements: `WITH`, `INSERT`, `UPDATE` and `DELETE`.
//!
//! The statement node is opened at a checkpoint taken before an optional
//! `WITH` clause, so the clause becomes the first child of whichever
//! statement follows it.

use super::disambiguate::{InsertParen, NameStart};
use super::parser::{PResult, Parser};
use crate::lexer::{Keyword, TokenKind};
use crate::tree::{ConflictActionKind, Rule};

impl Parser<'_> {
    /// `[WITH ...] {select | insert | update | delete}`.
    pub(super) fn parse_preparable_stmt(&mut self) -> PResult {
        let cp = self.builder.checkpoint();
        let with = self.peek_is(0, Keyword::With);
        if with {
            self.parse_with_clause()?;
        }
        match self.peek_keyword(0) {
            Some(Keyword::Insert) => self.node_at(cp, Rule::InsertStmt, Self::parse_insert_body),
            Some(Keyword::Update) => self.node_at(cp, Rule::UpdateStmt, Self::parse_update_body),
            Some(Keyword::Delete) => self.node_at(cp, Rule::DeleteStmt, Self::parse_delete_body),
            _ => {
                if with {
                    self.expect_labels(&["INSERT", "UPDATE", "DELETE"]);
                }
                self.node_at(cp, Rule::SelectStmt, Self::parse_select_body)
            }
        }
    }

    /// `WITH [RECURSIVE] cte, ...`.
    pub(super) fn parse_with_clause(&mut self) -> PResult {
        self.node(Rule::WithClause, |p| {
            p.expect_keyword(Keyword::With, "WITH clause")?;
            p.eat_keyword(Keyword::Recursive);
            loop {
                p.parse_common_table_expr()?;
                if !p.eat(TokenKind::Comma) {
                    return Ok(());
                }
            }
        })
    }

    /// `name [(cols)] AS [[NOT] MATERIALIZED] (stmt)`.
    fn parse_common_table_expr(&mut self) -> PResult {
        self.node(Rule::CommonTableExpr, |p| {
            p.parse_col_id("common table expression")?;
            if p.peek_kind(0) == TokenKind::LeftParen {
                p.parse_paren_name_list("common table expression")?;
            }
            p.expect_keyword(Keyword::As, "common table expression")?;
            if p.eat_keyword(Keyword::Not) {
                p.expect_keyword(Keyword::Materialized, "common table expression")?;
            } else {
                p.eat_keyword(Keyword::Materialized);
            }
            p.nested(|p| {
                p.expect(TokenKind::LeftParen, "common table expression")?;
                p.parse_preparable_stmt()?;
                p.expect(TokenKind::RightParen, "common table expression")
            })
        })
    }

    // --- INSERT ---

    fn parse_insert_body(&mut self) -> PResult {
        self.expect_keyword(Keyword::Insert, "INSERT statement")?;
        self.expect_keyword(Keyword::Into, "INSERT statement")?;
        self.node(Rule::InsertTarget, |p| {
            p.parse_qualified_name("INSERT target")?;
            if p.eat_keyword(Keyword::As) {
                p.parse_col_id("INSERT target alias")?;
            }
            Ok(())
        })?;
        if self.peek_kind(0) == TokenKind::LeftParen
            && self.classify_insert_paren()? == InsertParen::Columns
        {
            self.parse_insert_column_list()?;
        }
        if self.peek_is(0, Keyword::Overriding) {
            self.node(Rule::OverridingClause, |p| {
                p.advance();
                if !p.eat_keyword(Keyword::System) {
                    p.expect_keyword(Keyword::User, "OVERRIDING clause")?;
                }
                p.expect_keyword(Keyword::Value, "OVERRIDING clause")
            })?;
        }
        if self.peek_is(0, Keyword::Default) && self.peek_is(1, Keyword::Values) {
            self.node(Rule::DefaultValues, |p| {
                p.advance_n(2);
                Ok(())
            })?;
        } else {
            self.parse_select_stmt()?;
        }
        if self.peek_is(0, Keyword::On) && self.peek_is(1, Keyword::Conflict) {
            self.parse_on_conflict()?;
        }
        self.parse_opt_returning_clause()
    }

    /// `(col [indirection], ...)`.
    fn parse_insert_column_list(&mut self) -> PResult {
        self.node(Rule::InsertColumnList, |p| {
            p.expect(TokenKind::LeftParen, "INSERT column list")?;
            loop {
                p.parse_set_target()?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RightParen, "INSERT column list")
        })
    }

    fn parse_set_target(&mut self) -> PResult {
        self.node(Rule::SetTarget, |p| {
            p.parse_col_id("column name")?;
            p.parse_opt_indirection()
        })
    }

    /// `ON CONFLICT [target] DO NOTHING | DO UPDATE SET ... [WHERE ...]`.
    fn parse_on_conflict(&mut self) -> PResult {
        self.node(Rule::OnConflict, |p| {
            p.advance_n(2);
            if p.peek_kind(0) == TokenKind::LeftParen || p.peek_is(0, Keyword::On) {
                p.parse_conflict_target()?;
            }
            p.expect_keyword(Keyword::Do, "ON CONFLICT")?;
            match p.peek_keyword(0) {
                Some(Keyword::Nothing) => {
                    p.node(Rule::ConflictAction(ConflictActionKind::Nothing), |p| {
                        p.advance();
                        Ok(())
                    })
                }
                Some(Keyword::Update) => {
                    p.node(Rule::ConflictAction(ConflictActionKind::Update), |p| {
                        p.advance();
                        p.expect_keyword(Keyword::Set, "ON CONFLICT DO UPDATE")?;
                        p.parse_set_clause_list()?;
                        if p.peek_is(0, Keyword::Where) {
                            p.parse_where_clause(false)?;
                        }
                        Ok(())
                    })
                }
                _ => {
                    p.expect_labels(&["NOTHING", "UPDATE"]);
                    Err(p.error_at_current("ON CONFLICT"))
                }
            }
        })
    }

    /// `(index params) [WHERE ...]` or `ON CONSTRAINT name`.
    fn parse_conflict_target(&mut self) -> PResult {
        self.node(Rule::ConflictTarget, |p| {
            if p.eat_keyword(Keyword::On) {
                p.expect_keyword(Keyword::Constraint, "conflict target")?;
                return p.parse_col_id("constraint name");
            }
            p.expect(TokenKind::LeftParen, "conflict target")?;
            loop {
                p.parse_index_elem()?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RightParen, "conflict target")?;
            if p.peek_is(0, Keyword::Where) {
                p.parse_where_clause(false)?;
            }
            Ok(())
        })
    }

    /// `{col | func(...) | (expr)} [COLLATE c] [opclass] [ASC|DESC]
    /// [NULLS FIRST|LAST]`.
    pub(super) fn parse_index_elem(&mut self) -> PResult {
        self.node(Rule::IndexElem, |p| {
            if p.eat(TokenKind::LeftParen) {
                p.parse_a_expr()?;
                p.expect(TokenKind::RightParen, "index expression")?;
            } else if p.peek_kind(0).is_word()
                && p.classify_name_start() == NameStart::FunctionCall
            {
                p.parse_func_call()?;
            } else {
                p.parse_col_id("index column")?;
            }
            if p.eat_keyword(Keyword::Collate) {
                p.parse_qualified_name("COLLATE clause")?;
            }
            let nulls_order = p.peek_is(0, Keyword::Nulls)
                && matches!(p.peek_keyword(1), Some(Keyword::First | Keyword::Last));
            if p.peek_is_col_id(0) && !nulls_order {
                p.parse_qualified_name("operator class")?;
            }
            if !p.eat_keyword(Keyword::Asc) {
                p.eat_keyword(Keyword::Desc);
            }
            if p.eat_keyword(Keyword::Nulls) && !p.eat_keyword(Keyword::First) {
                p.expect_keyword(Keyword::Last, "NULLS ordering")?;
            }
            Ok(())
        })
    }

    /// `RETURNING target, ...` when present.
    fn parse_opt_returning_clause(&mut self) -> PResult {
        if !self.peek_is(0, Keyword::Returning) {
            return Ok(());
        }
        self.node(Rule::ReturningClause, |p| {
            p.advance();
            p.parse_target_list()
        })
    }

    // --- UPDATE ---

    fn parse_update_body(&mut self) -> PResult {
        self.expect_keyword(Keyword::Update, "UPDATE statement")?;
        self.parse_relation_expr()?;
        self.parse_opt_dml_alias()?;
        self.expect_keyword(Keyword::Set, "UPDATE statement")?;
        self.parse_set_clause_list()?;
        if self.peek_is(0, Keyword::From) {
            self.parse_from_clause()?;
        }
        if self.peek_is(0, Keyword::Where) {
            self.parse_where_clause(true)?;
        }
        self.parse_opt_returning_clause()
    }

    /// `[AS] alias` after the target of `UPDATE`/`DELETE`. A bare `SET`
    /// always starts the assignment list.
    fn parse_opt_dml_alias(&mut self) -> PResult {
        let bare = self.peek_is_col_id(0) && !self.peek_is(0, Keyword::Set);
        if !(bare || self.peek_is(0, Keyword::As)) {
            return Ok(());
        }
        self.node(Rule::AliasClause, |p| {
            p.eat_keyword(Keyword::As);
            p.parse_col_id("table alias")
        })
    }

    /// `target = expr, (t1, t2) = expr, ...`.
    fn parse_set_clause_list(&mut self) -> PResult {
        self.node(Rule::SetClauseList, |p| loop {
            p.node(Rule::SetClause, |p| {
                if p.peek_kind(0) == TokenKind::LeftParen {
                    p.node(Rule::SetTargetList, |p| {
                        p.advance();
                        loop {
                            p.parse_set_target()?;
                            if !p.eat(TokenKind::Comma) {
                                break;
                            }
                        }
                        p.expect(TokenKind::RightParen, "SET target list")
                    })?;
                } else {
                    p.parse_set_target()?;
                }
                p.expect(TokenKind::Eq, "SET clause")?;
                p.parse_a_expr()
            })?;
            if !p.eat(TokenKind::Comma) {
                return Ok(());
            }
        })
    }

    // --- DELETE ---

    fn parse_delete_body(&mut self) -> PResult {
        self.expect_keyword(Keyword::Delete, "DELETE statement")?;
        self.expect_keyword(Keyword::From, "DELETE statement")?;
        self.parse_relation_expr()?;
        self.parse_opt_dml_alias()?;
        if self.peek_is(0, Keyword::Using) {
            self.node(Rule::UsingClause, |p| {
                p.advance();
                p.parse_from_list()
            })?;
        }
        if self.peek_is(0, Keyword::Where) {
            self.parse_where_clause(true)?;
        }
        self.parse_opt_returning_clause()
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::PostgresDialect;
    use crate::parser::{ErrorKind, Parser};
    use crate::tree::{ConflictActionKind, ParseNode, Rule};

    static DIALECT: PostgresDialect = PostgresDialect::new();

    fn stmt(sql: &str) -> ParseNode {
        Parser::new(sql, &DIALECT)
            .parse_statement()
            .into_result()
            .unwrap_or_else(|errors| panic!("{sql}: {errors:?}"))
    }

    fn statement_rule(root: &ParseNode) -> Rule {
        root.child_nodes().next().map(ParseNode::rule).expect("statement")
    }

    #[test]
    fn test_with_clause_belongs_to_its_statement() {
        let root = stmt(
            "WITH RECURSIVE t (n) AS NOT MATERIALIZED (SELECT 1 UNION ALL SELECT n + 1 FROM t) \
             DELETE FROM x WHERE id IN (SELECT n FROM t)",
        );
        assert_eq!(statement_rule(&root), Rule::DeleteStmt);
        let delete = root.child(Rule::DeleteStmt).expect("delete");
        assert_eq!(
            delete.child_nodes().next().map(ParseNode::rule),
            Some(Rule::WithClause)
        );

        let root = stmt("WITH a AS (INSERT INTO t VALUES (1) RETURNING *) SELECT * FROM a");
        assert_eq!(statement_rule(&root), Rule::SelectStmt);
        assert!(root.find(|r| r == Rule::InsertStmt).is_some());
    }

    #[test]
    fn test_insert_forms() {
        let root = stmt("INSERT INTO s.t AS x (a, b[1], c.f) VALUES (1, 2, DEFAULT), (3, 4, 5)");
        let columns = root.find(|r| r == Rule::InsertColumnList).expect("columns");
        assert_eq!(columns.child_nodes().count(), 3);

        let root = stmt("INSERT INTO t (SELECT * FROM u)");
        assert!(root.find(|r| r == Rule::InsertColumnList).is_none());
        assert!(root.find(|r| r == Rule::SelectWithParens).is_some());

        let root = stmt("INSERT INTO t (a) OVERRIDING SYSTEM VALUE SELECT 1");
        assert!(root.find(|r| r == Rule::OverridingClause).is_some());

        let root = stmt("INSERT INTO t DEFAULT VALUES RETURNING id, a AS alias");
        assert!(root.find(|r| r == Rule::DefaultValues).is_some());
        assert!(root.find(|r| r == Rule::ReturningClause).is_some());
    }

    #[test]
    fn test_on_conflict() {
        let root = stmt(
            "INSERT INTO t (a, b) VALUES (1, 2) \
             ON CONFLICT (a, lower(b) COLLATE \"C\" text_pattern_ops DESC NULLS LAST) WHERE a > 0 \
             DO UPDATE SET b = excluded.b, (a, b) = (1, 2) WHERE t.a <> 1",
        );
        assert_eq!(root.find_all(|r| r == Rule::IndexElem).len(), 2);
        assert!(root
            .find(|r| r == Rule::ConflictAction(ConflictActionKind::Update))
            .is_some());
        assert!(root.find(|r| r == Rule::SetTargetList).is_some());

        let root = stmt("INSERT INTO t VALUES (1) ON CONFLICT ON CONSTRAINT t_pkey DO NOTHING");
        assert!(root
            .find(|r| r == Rule::ConflictAction(ConflictActionKind::Nothing))
            .is_some());
    }

    #[test]
    fn test_insert_column_list_rejects_reserved_word() {
        let result = Parser::new("INSERT INTO t (SELECT) VALUES (1)", &DIALECT).parse_statement();
        let error = &result.errors()[0];
        assert_eq!(error.kind, ErrorKind::Syntax);
        assert_eq!(error.found.as_deref(), Some("SELECT"));
        for label in ["identifier", "unreserved keyword", "column-name keyword"] {
            assert!(error.expected.contains(&label.to_string()), "{label}");
        }
    }

    #[test]
    fn test_update() {
        let root = stmt(
            "UPDATE ONLY t AS x SET a = 1, b[2] = DEFAULT FROM u WHERE x.id = u.id RETURNING *",
        );
        assert_eq!(statement_rule(&root), Rule::UpdateStmt);
        assert_eq!(root.find_all(|r| r == Rule::SetClause).len(), 2);
        assert!(root.find(|r| r == Rule::AliasClause).is_some());

        let root = stmt("UPDATE t SET a = 1 WHERE CURRENT OF c");
        assert!(root.find(|r| r == Rule::AliasClause).is_none());
        assert!(root.find(|r| r == Rule::CurrentOf).is_some());
    }

    #[test]
    fn test_delete() {
        let root = stmt("DELETE FROM t x USING u, v WHERE x.a = u.a RETURNING x.*");
        assert!(root.find(|r| r == Rule::UsingClause).is_some());
        let result = Parser::new("DELETE t", &DIALECT).parse_statement();
        assert!(result.errors()[0].expected.contains(&"FROM".to_string()));
    }
}

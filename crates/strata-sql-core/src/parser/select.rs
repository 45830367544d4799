//! SELECT statements: set operations, the clauses of a simple select, `FROM`
//! items and joins, sorting, limits and locking.

use super::disambiguate::{FromParen, NameStart};
use super::parser::{PResult, Parser};
use crate::dialect::OperatorClass;
use crate::lexer::{Keyword, KeywordClass, TokenKind};
use crate::tree::{Checkpoint, JoinKind, Rule, SetOp, SetQuantifier, TableRefKind};

/// Labels recorded when no select body starts at the current token.
const SELECT_START_LABELS: &[&str] = &["SELECT", "VALUES", "TABLE", "WITH", "'('"];

impl Parser<'_> {
    /// `[WITH ...] select_body [ORDER BY ...] [limit] [locking]`.
    pub(super) fn parse_select_stmt(&mut self) -> PResult {
        self.node(Rule::SelectStmt, |p| {
            if p.peek_is(0, Keyword::With) {
                p.parse_with_clause()?;
            }
            p.parse_select_body()
        })
    }

    /// Everything of a select statement after its `WITH` clause.
    pub(super) fn parse_select_body(&mut self) -> PResult {
        self.parse_set_expr(0)?;
        self.parse_select_tail()
    }

    /// `( select_stmt )`.
    pub(super) fn parse_select_with_parens(&mut self) -> PResult {
        self.nested(|p| {
            p.node(Rule::SelectWithParens, |p| {
                p.expect(TokenKind::LeftParen, "parenthesized select")?;
                p.parse_select_stmt()?;
                p.expect(TokenKind::RightParen, "parenthesized select")
            })
        })
    }

    /// Set operations over select primaries, climbing the
    /// `UNION`/`EXCEPT` and `INTERSECT` levels.
    fn parse_set_expr(&mut self, min_bp: u8) -> PResult {
        let cp = self.builder.checkpoint();
        self.parse_select_primary()?;
        let table = self.precedence();
        while let Some((op, class)) = self.peek_set_op() {
            let Some((left_bp, right_bp)) = table.binding_power(class) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }
            let quantifier = match self.peek_keyword(1) {
                Some(Keyword::All) => Some(SetQuantifier::All),
                Some(Keyword::Distinct) => Some(SetQuantifier::Distinct),
                _ => None,
            };
            self.node_at(cp, Rule::SetOperation { op, quantifier }, |p| {
                p.advance_n(1 + usize::from(quantifier.is_some()));
                p.nested(|p| p.parse_set_expr(right_bp))
            })?;
        }
        Ok(())
    }

    fn peek_set_op(&mut self) -> Option<(SetOp, OperatorClass)> {
        match self.peek_keyword(0)? {
            Keyword::Union => Some((SetOp::Union, OperatorClass::UnionExcept)),
            Keyword::Except => Some((SetOp::Except, OperatorClass::UnionExcept)),
            Keyword::Minus => Some((SetOp::Minus, OperatorClass::UnionExcept)),
            Keyword::Intersect => Some((SetOp::Intersect, OperatorClass::Intersect)),
            _ => None,
        }
    }

    fn parse_select_primary(&mut self) -> PResult {
        match self.peek_kind(0) {
            TokenKind::Keyword(Keyword::Select) => self.parse_simple_select(),
            TokenKind::Keyword(Keyword::Values) => self.parse_values_clause(),
            TokenKind::Keyword(Keyword::Table) => self.node(Rule::TableCommand, |p| {
                p.advance();
                p.parse_relation_expr()
            }),
            TokenKind::LeftParen => self.parse_select_with_parens(),
            _ => {
                self.expect_labels(SELECT_START_LABELS);
                Err(self.error_at_current("select statement"))
            }
        }
    }

    /// `ORDER BY`, limits and locking after a select body, in either of
    /// the orders the grammar allows.
    fn parse_select_tail(&mut self) -> PResult {
        if self.peek_is(0, Keyword::Order) {
            self.parse_sort_clause()?;
        }
        let limited = self.parse_opt_limit_clauses()?;
        if self.peek_is(0, Keyword::For) {
            self.parse_locking_clause()?;
            if !limited {
                self.parse_opt_limit_clauses()?;
            }
        }
        Ok(())
    }

    // --- SELECT ... ---

    fn parse_simple_select(&mut self) -> PResult {
        self.node(Rule::SimpleSelect, |p| {
            p.expect_keyword(Keyword::Select, "SELECT")?;
            if p.peek_is(0, Keyword::All) || p.peek_is(0, Keyword::Distinct) {
                p.parse_distinct_clause()?;
            }
            if p.peek_kind(0) == TokenKind::Star || p.can_start_expr(0) {
                p.parse_target_list()?;
            }
            if p.peek_is(0, Keyword::Into) {
                p.parse_into_clause()?;
            }
            if p.peek_is(0, Keyword::From) {
                p.parse_from_clause()?;
            }
            if p.peek_is(0, Keyword::Where) {
                p.parse_where_clause(false)?;
            }
            if p.peek_is(0, Keyword::Group) {
                p.parse_group_clause()?;
            }
            if p.peek_is(0, Keyword::Having) {
                p.node(Rule::HavingClause, |p| {
                    p.advance();
                    p.parse_a_expr()
                })?;
            }
            if p.peek_is(0, Keyword::Window) {
                p.parse_window_clause()?;
            }
            Ok(())
        })
    }

    /// `ALL`, `DISTINCT` or `DISTINCT ON (exprs)`.
    fn parse_distinct_clause(&mut self) -> PResult {
        self.node(Rule::DistinctClause, |p| {
            if p.eat_keyword(Keyword::All) {
                return Ok(());
            }
            p.advance();
            if p.eat_keyword(Keyword::On) {
                p.parse_paren_expr_list("DISTINCT ON")?;
            }
            Ok(())
        })
    }

    /// The select list; also used by `RETURNING`.
    pub(super) fn parse_target_list(&mut self) -> PResult {
        self.node(Rule::TargetList, |p| {
            loop {
                p.parse_target_el()?;
                if !p.eat(TokenKind::Comma) {
                    return Ok(());
                }
            }
        })
    }

    /// `*`, `expr AS label` or `expr label`.
    fn parse_target_el(&mut self) -> PResult {
        self.node(Rule::TargetEl, |p| {
            if p.eat(TokenKind::Star) {
                return Ok(());
            }
            p.parse_a_expr()?;
            if p.peek_is(0, Keyword::As) {
                p.node(Rule::ColumnAlias, |p| {
                    p.advance();
                    p.parse_col_label("column alias")
                })?;
            } else if p.peek_class(0) == Some(KeywordClass::PlainIdentifier) {
                p.node(Rule::ColumnAlias, |p| {
                    p.advance();
                    Ok(())
                })?;
            }
            Ok(())
        })
    }

    /// `INTO [TEMP|TEMPORARY|UNLOGGED ...] [TABLE] name`.
    fn parse_into_clause(&mut self) -> PResult {
        self.node(Rule::IntoClause, |p| {
            p.advance();
            if p.peek_is(0, Keyword::Local) || p.peek_is(0, Keyword::Global) {
                p.advance();
                if !(p.eat_keyword(Keyword::Temporary) || p.eat_keyword(Keyword::Temp)) {
                    return Err(p.error_at_current("INTO clause"));
                }
            } else if !p.eat_keyword(Keyword::Temporary) && !p.eat_keyword(Keyword::Temp) {
                p.eat_keyword(Keyword::Unlogged);
            }
            p.eat_keyword(Keyword::Table);
            p.parse_qualified_name("INTO clause")
        })
    }

    /// `WHERE condition`, or `WHERE CURRENT OF cursor` when `current_of`.
    pub(super) fn parse_where_clause(&mut self, current_of: bool) -> PResult {
        self.node(Rule::WhereClause, |p| {
            p.expect_keyword(Keyword::Where, "WHERE clause")?;
            if current_of && p.peek_is(0, Keyword::Current) && p.peek_is(1, Keyword::Of) {
                p.node(Rule::CurrentOf, |p| {
                    p.advance_n(2);
                    p.parse_col_id("cursor name")
                })
            } else {
                p.parse_a_expr()
            }
        })
    }

    /// `GROUP BY [ALL|DISTINCT] item, ...`.
    fn parse_group_clause(&mut self) -> PResult {
        self.node(Rule::GroupClause, |p| {
            p.advance();
            p.expect_keyword(Keyword::By, "GROUP BY")?;
            if !p.eat_keyword(Keyword::All) {
                p.eat_keyword(Keyword::Distinct);
            }
            p.parse_group_by_list()
        })
    }

    fn parse_group_by_list(&mut self) -> PResult {
        loop {
            self.parse_group_by_item()?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// `()`, `ROLLUP (...)`, `CUBE (...)`, `GROUPING SETS (...)` or an
    /// expression.
    fn parse_group_by_item(&mut self) -> PResult {
        let paren_next = self.peek_kind(1) == TokenKind::LeftParen;
        match self.peek_kind(0) {
            TokenKind::LeftParen if self.peek_kind(1) == TokenKind::RightParen => {
                self.node(Rule::EmptyGroupingSet, |p| {
                    p.advance_n(2);
                    Ok(())
                })
            }
            TokenKind::Keyword(Keyword::Rollup) if paren_next => self.node(Rule::Rollup, |p| {
                p.advance();
                p.parse_paren_expr_list("ROLLUP")
            }),
            TokenKind::Keyword(Keyword::Cube) if paren_next => self.node(Rule::Cube, |p| {
                p.advance();
                p.parse_paren_expr_list("CUBE")
            }),
            TokenKind::Keyword(Keyword::Grouping) if self.peek_is(1, Keyword::Sets) => {
                self.node(Rule::GroupingSets, |p| {
                    p.advance_n(2);
                    p.expect(TokenKind::LeftParen, "GROUPING SETS")?;
                    p.nested(Self::parse_group_by_list)?;
                    p.expect(TokenKind::RightParen, "GROUPING SETS")
                })
            }
            _ => self.parse_a_expr(),
        }
    }

    /// `WINDOW name AS (spec), ...`.
    fn parse_window_clause(&mut self) -> PResult {
        self.node(Rule::WindowClause, |p| {
            p.advance();
            loop {
                p.node(Rule::WindowDefinition, |p| {
                    p.parse_col_id("window name")?;
                    p.expect_keyword(Keyword::As, "window definition")?;
                    p.parse_window_spec()
                })?;
                if !p.eat(TokenKind::Comma) {
                    return Ok(());
                }
            }
        })
    }

    /// `ORDER BY item [ASC|DESC|USING op] [NULLS FIRST|LAST], ...`.
    pub(super) fn parse_sort_clause(&mut self) -> PResult {
        self.node(Rule::SortClause, |p| {
            p.expect_keyword(Keyword::Order, "ORDER BY")?;
            p.expect_keyword(Keyword::By, "ORDER BY")?;
            loop {
                p.node(Rule::SortBy, |p| {
                    p.parse_a_expr()?;
                    match p.peek_keyword(0) {
                        Some(Keyword::Asc | Keyword::Desc) => p.advance(),
                        Some(Keyword::Using) => {
                            p.advance();
                            if p.peek_is(0, Keyword::Operator) {
                                p.parse_qualified_operator()?;
                            } else if p.peek_is_operator(0) {
                                p.advance();
                            } else {
                                p.expect_label("operator");
                                return Err(p.error_at_current("ORDER BY ... USING"));
                            }
                        }
                        _ => {}
                    }
                    if p.eat_keyword(Keyword::Nulls) {
                        if !p.eat_keyword(Keyword::First) {
                            p.expect_keyword(Keyword::Last, "NULLS ordering")?;
                        }
                    }
                    Ok(())
                })?;
                if !p.eat(TokenKind::Comma) {
                    return Ok(());
                }
            }
        })
    }

    /// `LIMIT`, `OFFSET` and `FETCH`, each at most once and in any order.
    /// Returns true if any was present.
    fn parse_opt_limit_clauses(&mut self) -> PResult<bool> {
        let (mut limit, mut offset) = (false, false);
        loop {
            match self.peek_keyword(0) {
                Some(Keyword::Limit) if !limit => {
                    limit = true;
                    self.node(Rule::LimitClause, |p| {
                        p.advance();
                        if !p.eat_keyword(Keyword::All) {
                            p.parse_a_expr()?;
                        }
                        Ok(())
                    })?;
                }
                Some(Keyword::Fetch) if !limit => {
                    limit = true;
                    self.parse_fetch_clause()?;
                }
                Some(Keyword::Offset) if !offset => {
                    offset = true;
                    self.node(Rule::OffsetClause, |p| {
                        p.advance();
                        p.parse_a_expr()?;
                        if !p.eat_keyword(Keyword::Rows) {
                            p.eat_keyword(Keyword::Row);
                        }
                        Ok(())
                    })?;
                }
                _ => return Ok(limit || offset),
            }
        }
    }

    /// `FETCH FIRST|NEXT [count] ROW|ROWS ONLY|WITH TIES`.
    fn parse_fetch_clause(&mut self) -> PResult {
        self.node(Rule::FetchClause, |p| {
            p.advance();
            if !p.eat_keyword(Keyword::First) {
                p.expect_keyword(Keyword::Next, "FETCH clause")?;
            }
            let bare = matches!(p.peek_keyword(0), Some(Keyword::Row | Keyword::Rows))
                && matches!(p.peek_keyword(1), Some(Keyword::Only | Keyword::With));
            if !bare {
                p.parse_b_expr()?;
            }
            if !p.eat_keyword(Keyword::Rows) {
                p.expect_keyword(Keyword::Row, "FETCH clause")?;
            }
            if p.eat_keyword(Keyword::With) {
                p.expect_keyword(Keyword::Ties, "FETCH clause")
            } else {
                p.expect_keyword(Keyword::Only, "FETCH clause")
            }
        })
    }

    /// `FOR READ ONLY` or one or more locking items.
    fn parse_locking_clause(&mut self) -> PResult {
        self.node(Rule::LockingClause, |p| {
            if p.peek_is(1, Keyword::Read) {
                p.advance_n(2);
                return p.expect_keyword(Keyword::Only, "FOR READ ONLY");
            }
            while p.peek_is(0, Keyword::For) {
                p.parse_locking_item()?;
            }
            Ok(())
        })
    }

    /// `FOR {UPDATE | NO KEY UPDATE | SHARE | KEY SHARE} [OF names]
    /// [NOWAIT | SKIP LOCKED]`.
    fn parse_locking_item(&mut self) -> PResult {
        self.node(Rule::LockingItem, |p| {
            p.advance();
            match p.peek_keyword(0) {
                Some(Keyword::Update | Keyword::Share) => p.advance(),
                Some(Keyword::No) => {
                    p.advance();
                    p.expect_keyword(Keyword::Key, "locking clause")?;
                    p.expect_keyword(Keyword::Update, "locking clause")?;
                }
                Some(Keyword::Key) => {
                    p.advance();
                    p.expect_keyword(Keyword::Share, "locking clause")?;
                }
                _ => {
                    p.expect_labels(&["UPDATE", "NO", "SHARE", "KEY", "READ"]);
                    return Err(p.error_at_current("locking clause"));
                }
            }
            if p.eat_keyword(Keyword::Of) {
                p.parse_qualified_name_list("locking clause")?;
            }
            if !p.eat_keyword(Keyword::NoWait) && p.eat_keyword(Keyword::Skip) {
                p.expect_keyword(Keyword::Locked, "SKIP LOCKED")?;
            }
            Ok(())
        })
    }

    /// `VALUES (...), (...)`.
    pub(super) fn parse_values_clause(&mut self) -> PResult {
        self.node(Rule::ValuesClause, |p| {
            p.expect_keyword(Keyword::Values, "VALUES list")?;
            loop {
                p.node(Rule::ValuesRow, |p| p.parse_paren_expr_list("VALUES list"))?;
                if !p.eat(TokenKind::Comma) {
                    return Ok(());
                }
            }
        })
    }

    // --- FROM ---

    /// `FROM item, ...`.
    pub(super) fn parse_from_clause(&mut self) -> PResult {
        self.node(Rule::FromClause, |p| {
            p.advance();
            p.parse_from_list()
        })
    }

    /// `item, ...` where each item may be a join chain.
    pub(super) fn parse_from_list(&mut self) -> PResult {
        loop {
            self.parse_table_ref()?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// A `FROM` item followed by any joins.
    fn parse_table_ref(&mut self) -> PResult {
        let cp = self.builder.checkpoint();
        self.parse_table_primary()?;
        self.parse_joins(cp)
    }

    /// Folds joins into the item that starts at `cp`. Joins associate to
    /// the left, except that a join still waiting for its `ON`/`USING`
    /// takes any directly following joins as its right operand.
    fn parse_joins(&mut self, cp: Checkpoint) -> PResult {
        while let Some((kind, natural, len)) = self.peek_join() {
            self.node_at(cp, Rule::JoinedTable { kind, natural }, |p| {
                p.advance_n(len);
                let right = p.builder.checkpoint();
                p.parse_table_primary()?;
                let needs_qual = kind != JoinKind::Cross && !natural;
                if !needs_qual {
                    return Ok(());
                }
                if p.peek_join().is_some() {
                    p.nested(|p| p.parse_joins(right))?;
                }
                p.parse_join_qual()
            })?;
        }
        Ok(())
    }

    /// The join at the current token: kind, `NATURAL`, and how many tokens
    /// up to and including `JOIN`.
    fn peek_join(&mut self) -> Option<(JoinKind, bool, usize)> {
        if self.peek_is(0, Keyword::Cross) {
            return self
                .peek_is(1, Keyword::Join)
                .then_some((JoinKind::Cross, false, 2));
        }
        let natural = self.peek_is(0, Keyword::Natural);
        let mut k = usize::from(natural);
        let kind = match self.peek_keyword(k)? {
            Keyword::Join => JoinKind::Inner,
            Keyword::Inner => {
                k += 1;
                JoinKind::Inner
            }
            keyword @ (Keyword::Left | Keyword::Right | Keyword::Full) => {
                k += 1;
                if self.peek_is(k, Keyword::Outer) {
                    k += 1;
                }
                match keyword {
                    Keyword::Left => JoinKind::Left,
                    Keyword::Right => JoinKind::Right,
                    _ => JoinKind::Full,
                }
            }
            _ => return None,
        };
        self.peek_is(k, Keyword::Join)
            .then_some((kind, natural, k + 1))
    }

    /// `ON condition` or `USING (cols) [AS alias]`.
    fn parse_join_qual(&mut self) -> PResult {
        self.node(Rule::JoinQual, |p| {
            if p.eat_keyword(Keyword::On) {
                return p.parse_a_expr();
            }
            if p.eat_keyword(Keyword::Using) {
                p.parse_paren_name_list("USING clause")?;
                if p.eat_keyword(Keyword::As) {
                    p.parse_col_id("join alias")?;
                }
                return Ok(());
            }
            Err(p.error_at_current("join condition"))
        })
    }

    /// One `FROM` item without trailing joins.
    fn parse_table_primary(&mut self) -> PResult {
        let lateral = self.peek_is(0, Keyword::Lateral);
        let at = usize::from(lateral);
        match self.peek_kind(at) {
            TokenKind::LeftParen => {
                let mark = self.stream.mark();
                if lateral {
                    self.stream.skip();
                }
                let form = self.classify_from_paren();
                self.stream.rewind(mark);
                match form? {
                    FromParen::Subquery => {
                        self.node(Rule::TableRef(TableRefKind::Subquery), |p| {
                            if lateral {
                        p.advance();
                    }
                            p.parse_select_with_parens()?;
                            p.parse_opt_alias_clause()
                        })
                    }
                    FromParen::JoinedTable if !lateral => self.parse_parenthesized_join(),
                    FromParen::JoinedTable => {
                        self.advance();
                        self.expect_labels(&["SELECT", "VALUES", "WITH", "TABLE"]);
                        Err(self.error_at_current("LATERAL subquery"))
                    }
                }
            }
            TokenKind::Keyword(Keyword::Rows) if self.peek_is(at + 1, Keyword::From) => {
                self.node(Rule::TableRef(TableRefKind::RowsFrom), |p| {
                    if lateral {
                        p.advance();
                    }
                    p.parse_rows_from()?;
                    p.parse_opt_ordinality()?;
                    p.parse_opt_func_alias_clause()
                })
            }
            TokenKind::Keyword(Keyword::XmlTable)
                if self.peek_kind(at + 1) == TokenKind::LeftParen =>
            {
                self.node(Rule::TableRef(TableRefKind::XmlTable), |p| {
                    if lateral {
                        p.advance();
                    }
                    p.parse_xml_table()?;
                    p.parse_opt_alias_clause()
                })
            }
            _ if lateral || self.peek_is_function_table() => {
                self.node(Rule::TableRef(TableRefKind::Function), |p| {
                    if lateral {
                        p.advance();
                    }
                    p.parse_func_call()?;
                    p.parse_opt_ordinality()?;
                    p.parse_opt_func_alias_clause()
                })
            }
            _ => self.node(Rule::TableRef(TableRefKind::Relation), |p| {
                p.parse_relation_expr()?;
                p.parse_opt_alias_clause()?;
                if p.peek_is(0, Keyword::TableSample) {
                    p.parse_table_sample()?;
                }
                Ok(())
            }),
        }
    }

    /// Returns true if a word at the current token begins a function call.
    fn peek_is_function_table(&mut self) -> bool {
        self.peek_kind(0).is_word()
            && self.peek_class(0) != Some(KeywordClass::Reserved)
            && self.classify_name_start() == NameStart::FunctionCall
    }

    /// `( joined_table ) [alias]`, where the joined table may itself be
    /// parenthesized.
    fn parse_parenthesized_join(&mut self) -> PResult {
        self.nested(|p| {
            p.node(Rule::TableRef(TableRefKind::Parenthesized), |p| {
                p.advance();
                p.parse_table_ref()?;
                if !matches!(
                    p.builder.last_node_rule(),
                    Some(Rule::JoinedTable { .. } | Rule::TableRef(TableRefKind::Parenthesized))
                ) {
                    p.expect_label("JOIN");
                    return Err(p.error_at_current("parenthesized join"));
                }
                p.expect(TokenKind::RightParen, "parenthesized join")?;
                p.parse_opt_alias_clause()
            })
        })
    }

    /// `[ONLY] name [*]` or `ONLY (name)`.
    pub(super) fn parse_relation_expr(&mut self) -> PResult {
        self.node(Rule::RelationExpr, |p| {
            if p.eat_keyword(Keyword::Only) {
                if p.eat(TokenKind::LeftParen) {
                    p.parse_qualified_name("relation")?;
                    return p.expect(TokenKind::RightParen, "relation");
                }
                return p.parse_qualified_name("relation");
            }
            p.parse_qualified_name("relation")?;
            p.eat(TokenKind::Star);
            Ok(())
        })
    }

    /// `[AS] alias [(cols)]`.
    fn parse_opt_alias_clause(&mut self) -> PResult {
        if !(self.peek_is(0, Keyword::As) || self.peek_is_col_id(0)) {
            return Ok(());
        }
        self.node(Rule::AliasClause, |p| {
            p.eat_keyword(Keyword::As);
            p.parse_col_id("table alias")?;
            if p.peek_kind(0) == TokenKind::LeftParen {
                p.parse_paren_name_list("alias column list")?;
            }
            Ok(())
        })
    }

    /// The alias of a function table, where the column list may carry
    /// types: `AS (a int, b text)`, `AS x (a int)`, or a plain alias.
    fn parse_opt_func_alias_clause(&mut self) -> PResult {
        let as_defs = self.peek_is(0, Keyword::As) && self.peek_kind(1) == TokenKind::LeftParen;
        if !(as_defs || self.peek_is(0, Keyword::As) || self.peek_is_col_id(0)) {
            return Ok(());
        }
        self.node(Rule::AliasClause, |p| {
            p.eat_keyword(Keyword::As);
            if !as_defs {
                p.parse_col_id("table alias")?;
            }
            if p.peek_kind(0) != TokenKind::LeftParen {
                return Ok(());
            }
            if !as_defs && p.alias_list_is_names() {
                p.parse_paren_name_list("alias column list")
            } else {
                p.parse_column_def_list()
            }
        })
    }

    /// `(name type [COLLATE c], ...)`.
    fn parse_column_def_list(&mut self) -> PResult {
        self.node(Rule::ColumnDefList, |p| {
            p.expect(TokenKind::LeftParen, "column definition list")?;
            loop {
                p.node(Rule::ColumnDef, |p| {
                    p.parse_col_id("column definition")?;
                    p.parse_type_name()?;
                    if p.eat_keyword(Keyword::Collate) {
                        p.parse_qualified_name("COLLATE clause")?;
                    }
                    Ok(())
                })?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RightParen, "column definition list")
        })
    }

    fn parse_opt_ordinality(&mut self) -> PResult {
        if self.peek_is(0, Keyword::With) && self.peek_is(1, Keyword::Ordinality) {
            self.node(Rule::WithOrdinality, |p| {
                p.advance_n(2);
                Ok(())
            })?;
        }
        Ok(())
    }

    /// `TABLESAMPLE method (args) [REPEATABLE (seed)]`.
    fn parse_table_sample(&mut self) -> PResult {
        self.node(Rule::TableSample, |p| {
            p.advance();
            p.parse_func_name()?;
            p.parse_paren_expr_list("TABLESAMPLE clause")?;
            if p.eat_keyword(Keyword::Repeatable) {
                p.expect(TokenKind::LeftParen, "REPEATABLE clause")?;
                p.parse_a_expr()?;
                p.expect(TokenKind::RightParen, "REPEATABLE clause")?;
            }
            Ok(())
        })
    }

    /// `ROWS FROM (func [AS (defs)], ...)`.
    fn parse_rows_from(&mut self) -> PResult {
        self.node(Rule::RowsFrom, |p| {
            p.advance_n(2);
            p.expect(TokenKind::LeftParen, "ROWS FROM")?;
            loop {
                p.parse_func_call()?;
                if p.eat_keyword(Keyword::As) {
                    p.parse_column_def_list()?;
                }
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RightParen, "ROWS FROM")
        })
    }

    /// `XMLTABLE ([XMLNAMESPACES (...),] row PASSING doc COLUMNS col, ...)`.
    fn parse_xml_table(&mut self) -> PResult {
        self.advance_n(2);
        if self.peek_is(0, Keyword::XmlNamespaces) {
            self.node(Rule::XmlNamespaces, |p| {
                p.advance();
                p.expect(TokenKind::LeftParen, "XMLNAMESPACES")?;
                loop {
                    if p.eat_keyword(Keyword::Default) {
                        p.parse_b_expr()?;
                    } else {
                        p.parse_b_expr()?;
                        p.expect_keyword(Keyword::As, "XMLNAMESPACES")?;
                        p.parse_col_label("XMLNAMESPACES")?;
                    }
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
                p.expect(TokenKind::RightParen, "XMLNAMESPACES")
            })?;
            self.expect(TokenKind::Comma, "XMLTABLE")?;
        }
        self.parse_b_expr()?;
        self.parse_xml_passing()?;
        self.expect_keyword(Keyword::Columns, "XMLTABLE")?;
        loop {
            self.parse_xml_table_column()?;
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen, "XMLTABLE")
    }

    /// `name FOR ORDINALITY` or `name type [PATH p] [DEFAULT d] [[NOT] NULL]`.
    fn parse_xml_table_column(&mut self) -> PResult {
        self.node(Rule::XmlTableColumn, |p| {
            p.parse_col_id("XMLTABLE column")?;
            if p.eat_keyword(Keyword::For) {
                return p.expect_keyword(Keyword::Ordinality, "XMLTABLE column");
            }
            p.parse_type_name()?;
            loop {
                match p.peek_keyword(0) {
                    Some(Keyword::Path | Keyword::Default) => {
                        p.advance();
                        p.parse_b_expr()?;
                    }
                    Some(Keyword::Not) if p.peek_is(1, Keyword::Null) => p.advance_n(2),
                    Some(Keyword::Null) => p.advance(),
                    _ => return Ok(()),
                }
            }
        })
    }
}

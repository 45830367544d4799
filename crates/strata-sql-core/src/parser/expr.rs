//! Primary expressions (`c_expr`): constants, column references, function
//! calls, subqueries, constructors and the functions with dedicated syntax.

use super::disambiguate::{NameStart, ParenForm};
use super::parser::{PResult, Parser, COL_ID_LABELS};
use crate::lexer::{Keyword, KeywordClass, TokenKind};
use crate::parser::ParseError;
use crate::tree::{ConstKind, ExprForm, FrameBoundKind, FrameUnit, RowKind, Rule, SpecialFunction};

/// Labels recorded when no expression starts at the current token.
const EXPRESSION_START_LABELS: &[&str] = &["constant", "parameter", "'('", "expression"];

impl Parser<'_> {
    /// Parses a primary expression.
    pub(super) fn parse_primary(&mut self) -> PResult {
        let kind = self.peek_kind(0);
        match kind {
            TokenKind::Integer | TokenKind::Decimal => self.parse_numeric_const(),
            TokenKind::BitString | TokenKind::HexString => {
                self.token_node(Rule::Const(ConstKind::BitString));
                Ok(())
            }
            k if k.is_sconst() => self.parse_string_const(),
            TokenKind::Param | TokenKind::QuestionMark => self.node(Rule::Param, |p| {
                p.advance();
                p.parse_opt_indirection()
            }),
            TokenKind::LeftParen => self.parse_paren_primary(),
            TokenKind::Keyword(keyword) => self.parse_keyword_primary(keyword),
            TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::UnicodeIdentifier => {
                self.parse_name_primary()
            }
            _ => Err(self.expression_start_error()),
        }
    }

    fn expression_start_error(&mut self) -> ParseError {
        self.expect_labels(COL_ID_LABELS);
        self.expect_labels(EXPRESSION_START_LABELS);
        self.error_at_current("expression")
    }

    /// `42`, `1.5`, or `42::type` when the literal carries a cast marker.
    fn parse_numeric_const(&mut self) -> PResult {
        let cp = self.builder.checkpoint();
        let kind = if self.peek_kind(0) == TokenKind::Integer {
            ConstKind::Integer
        } else {
            ConstKind::Decimal
        };
        let (literal, marker) = self.stream.consume().split_cast_marker();
        self.builder.start_node(Rule::Const(kind));
        self.builder.token(literal);
        self.builder.finish_node();
        if let Some(marker) = marker {
            self.builder.token(marker);
            self.parse_type_name()?;
            self.wrap(cp, Rule::TypeCast);
        }
        Ok(())
    }

    /// A character string, with `UESCAPE 'c'` after a Unicode string.
    fn parse_string_const(&mut self) -> PResult {
        let unicode = self.peek_kind(0) == TokenKind::UnicodeString;
        self.node(Rule::Const(ConstKind::String), |p| {
            p.advance();
            if unicode && p.peek_is(0, Keyword::UEscape) && p.peek_kind(1).is_sconst() {
                p.advance_n(2);
            }
            Ok(())
        })
    }

    /// `( select )`, `( expr )` or an implicit row `( a, b, ... )`.
    fn parse_paren_primary(&mut self) -> PResult {
        match self.classify_paren()? {
            ParenForm::Subquery => self.node(Rule::ScalarSubquery, |p| {
                p.parse_select_with_parens()?;
                p.parse_opt_indirection()
            }),
            ParenForm::ExprOrRow => {
                let cp = self.builder.checkpoint();
                self.advance();
                let list = self.builder.checkpoint();
                self.parse_a_expr()?;
                if self.peek_kind(0) == TokenKind::Comma {
                    while self.eat(TokenKind::Comma) {
                        self.parse_a_expr()?;
                    }
                    self.wrap(list, Rule::ExprList);
                    self.expect(TokenKind::RightParen, "row constructor")?;
                    self.wrap(cp, Rule::Row(RowKind::Implicit));
                } else {
                    self.expect(TokenKind::RightParen, "parenthesized expression")?;
                    self.parse_opt_indirection()?;
                    self.wrap(cp, Rule::ParenExpr);
                }
                Ok(())
            }
        }
    }

    fn parse_keyword_primary(&mut self, keyword: Keyword) -> PResult {
        let paren_next = self.peek_kind(1) == TokenKind::LeftParen;
        match keyword {
            Keyword::Null => {
                self.token_node(Rule::Const(ConstKind::Null));
                Ok(())
            }
            Keyword::True | Keyword::False => {
                self.token_node(Rule::Const(ConstKind::Boolean));
                Ok(())
            }
            Keyword::Case => self.parse_case_expr(),
            Keyword::Cast => self.node(Rule::TypeCast, |p| {
                p.advance();
                p.expect(TokenKind::LeftParen, "CAST expression")?;
                p.parse_a_expr()?;
                p.expect_keyword(Keyword::As, "CAST expression")?;
                p.parse_type_name()?;
                p.expect(TokenKind::RightParen, "CAST expression")
            }),
            Keyword::Array => self.parse_array_primary(),
            Keyword::Exists if paren_next => self.node(Rule::Exists, |p| {
                p.advance();
                p.parse_required_subquery("EXISTS expression")
            }),
            Keyword::Unique if paren_next => self.node(Rule::Expr(ExprForm::Unique), |p| {
                p.advance();
                p.parse_required_subquery("UNIQUE predicate")
            }),
            Keyword::Row if paren_next => self.node(Rule::Row(RowKind::Explicit), |p| {
                p.advance_n(2);
                if p.peek_kind(0) != TokenKind::RightParen {
                    p.parse_expr_list()?;
                }
                p.expect(TokenKind::RightParen, "row constructor")
            }),
            Keyword::Default => {
                self.token_node(Rule::DefaultExpr);
                Ok(())
            }
            Keyword::CurrentDate => self.parse_value_function(SpecialFunction::CurrentDate, false),
            Keyword::CurrentTime => self.parse_value_function(SpecialFunction::CurrentTime, true),
            Keyword::CurrentTimestamp => {
                self.parse_value_function(SpecialFunction::CurrentTimestamp, true)
            }
            Keyword::LocalTime => self.parse_value_function(SpecialFunction::LocalTime, true),
            Keyword::LocalTimestamp => {
                self.parse_value_function(SpecialFunction::LocalTimestamp, true)
            }
            Keyword::CurrentRole => self.parse_value_function(SpecialFunction::CurrentRole, false),
            Keyword::CurrentUser => self.parse_value_function(SpecialFunction::CurrentUser, false),
            Keyword::SessionUser => self.parse_value_function(SpecialFunction::SessionUser, false),
            Keyword::User => self.parse_value_function(SpecialFunction::User, false),
            Keyword::CurrentCatalog => {
                self.parse_value_function(SpecialFunction::CurrentCatalog, false)
            }
            Keyword::CurrentSchema if !paren_next => {
                self.parse_value_function(SpecialFunction::CurrentSchema, false)
            }
            Keyword::SysDate => self.parse_value_function(SpecialFunction::SysDate, false),
            Keyword::RowNum => self.parse_value_function(SpecialFunction::RowNum, false),
            Keyword::Collation if self.peek_is(1, Keyword::For) => self.node(
                Rule::SpecialFunction(SpecialFunction::CollationFor),
                |p| {
                    p.advance_n(2);
                    p.expect(TokenKind::LeftParen, "COLLATION FOR")?;
                    p.parse_a_expr()?;
                    p.expect(TokenKind::RightParen, "COLLATION FOR")
                },
            ),
            _ if paren_next && special_function(keyword).is_some() => {
                self.parse_special_function(keyword)
            }
            _ if self.peek_is_type_keyword(0) && self.type_keyword_starts_literal() => {
                self.parse_typed_literal()
            }
            _ if self.peek_class(0) == Some(KeywordClass::Reserved) => {
                Err(self.expression_start_error())
            }
            _ => self.parse_name_primary(),
        }
    }

    /// `CURRENT_DATE`, `CURRENT_USER`, `CURRENT_TIMESTAMP [(p)]`, ...
    fn parse_value_function(&mut self, function: SpecialFunction, precision: bool) -> PResult {
        self.node(Rule::SpecialFunction(function), |p| {
            p.advance();
            if precision && p.eat(TokenKind::LeftParen) {
                p.expect(TokenKind::Integer, "time precision")?;
                p.expect(TokenKind::RightParen, "time precision")?;
            }
            Ok(())
        })
    }

    /// An identifier or non-reserved keyword at expression start.
    fn parse_name_primary(&mut self) -> PResult {
        match self.classify_name_start() {
            NameStart::FunctionCall => self.parse_func_call(),
            NameStart::TypedLiteral => self.parse_typed_literal(),
            NameStart::ColumnRef => {
                if self.peek_is_col_id(0) {
                    self.parse_column_ref()
                } else {
                    self.advance();
                    self.expect_label(TokenKind::LeftParen.describe());
                    Err(self.error_at_current("function call"))
                }
            }
        }
    }

    /// `type 'text'`, `name(args) 'text'` and `INTERVAL 'text' [fields]`.
    fn parse_typed_literal(&mut self) -> PResult {
        let interval = self.peek_is(0, Keyword::Interval);
        self.node(Rule::TypedLiteral, |p| {
            p.parse_type_name()?;
            if !p.peek_kind(0).is_sconst() {
                p.expect_label("string");
                return Err(p.error_at_current("typed literal"));
            }
            p.advance();
            if interval {
                p.parse_opt_interval_fields()?;
            }
            Ok(())
        })
    }

    /// `CASE [arg] WHEN ... THEN ... [ELSE ...] END`.
    fn parse_case_expr(&mut self) -> PResult {
        self.node(Rule::CaseExpr, |p| {
            p.advance();
            if !p.peek_is(0, Keyword::When) {
                p.parse_a_expr()?;
            }
            if !p.check_keyword(Keyword::When) {
                return Err(p.error_at_current("CASE expression"));
            }
            while p.peek_is(0, Keyword::When) {
                p.node(Rule::CaseWhen, |p| {
                    p.advance();
                    p.parse_a_expr()?;
                    p.expect_keyword(Keyword::Then, "CASE expression")?;
                    p.parse_a_expr()
                })?;
            }
            if p.peek_is(0, Keyword::Else) {
                p.node(Rule::CaseElse, |p| {
                    p.advance();
                    p.parse_a_expr()
                })?;
            } else {
                p.expect_labels(&["WHEN", "ELSE"]);
            }
            p.expect_keyword(Keyword::End, "CASE expression")
        })
    }

    /// `ARRAY[...]` or `ARRAY(select)`.
    fn parse_array_primary(&mut self) -> PResult {
        if self.peek_kind(1) == TokenKind::LeftParen {
            return self.node(Rule::ArraySubquery, |p| {
                p.advance();
                p.parse_required_subquery("ARRAY subquery")
            });
        }
        self.node(Rule::ArrayExpr, |p| {
            p.advance();
            p.parse_array_body()
        })
    }

    /// `[ ]`, `[ expr, ... ]` or `[ [..], [..] ]`.
    fn parse_array_body(&mut self) -> PResult {
        self.expect(TokenKind::LeftBracket, "array constructor")?;
        match self.peek_kind(0) {
            TokenKind::RightBracket => {}
            TokenKind::LeftBracket => loop {
                self.nested(|p| p.node(Rule::ArrayExpr, Self::parse_array_body))?;
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            },
            _ => self.parse_expr_list()?,
        }
        self.expect(TokenKind::RightBracket, "array constructor")
    }

    /// A parenthesized select that must be present.
    fn parse_required_subquery(&mut self, construct: &str) -> PResult {
        if self.scan_select_in_parens() {
            self.parse_select_with_parens()
        } else {
            self.expect(TokenKind::LeftParen, construct)?;
            self.expect_labels(&["SELECT", "VALUES", "WITH", "TABLE"]);
            Err(self.error_at_current(construct))
        }
    }

    // --- Function calls ---

    /// `func_name ( [args] ) [WITHIN GROUP (...)] [FILTER (...)] [OVER ...]`.
    pub(super) fn parse_func_call(&mut self) -> PResult {
        self.node(Rule::FuncCall, |p| {
            p.parse_func_name()?;
            p.expect(TokenKind::LeftParen, "function call")?;
            p.parse_func_args()?;
            p.expect(TokenKind::RightParen, "function call")?;
            if p.peek_is(0, Keyword::Within) && p.peek_is(1, Keyword::Group) {
                p.node(Rule::WithinGroup, |p| {
                    p.advance_n(2);
                    p.expect(TokenKind::LeftParen, "WITHIN GROUP")?;
                    p.parse_sort_clause()?;
                    p.expect(TokenKind::RightParen, "WITHIN GROUP")
                })?;
            }
            if p.peek_is(0, Keyword::Filter) && p.peek_kind(1) == TokenKind::LeftParen {
                p.node(Rule::FilterClause, |p| {
                    p.advance_n(2);
                    p.expect_keyword(Keyword::Where, "FILTER clause")?;
                    p.parse_a_expr()?;
                    p.expect(TokenKind::RightParen, "FILTER clause")
                })?;
            }
            if p.peek_is(0, Keyword::Over)
                && (p.peek_kind(1) == TokenKind::LeftParen || p.peek_is_col_id(1))
            {
                p.node(Rule::OverClause, |p| {
                    p.advance();
                    if p.peek_kind(0) == TokenKind::LeftParen {
                        p.parse_window_spec()
                    } else {
                        p.parse_col_id("OVER clause")
                    }
                })?;
            }
            Ok(())
        })
    }

    /// The inside of a call's parentheses.
    fn parse_func_args(&mut self) -> PResult {
        match self.peek_kind(0) {
            TokenKind::RightParen => return Ok(()),
            TokenKind::Star => {
                self.advance();
                return Ok(());
            }
            _ => {}
        }
        if !self.eat_keyword(Keyword::All) {
            self.eat_keyword(Keyword::Distinct);
        }
        self.node(Rule::ExprList, |p| {
            loop {
                let variadic = p.eat_keyword(Keyword::Variadic);
                p.parse_func_arg()?;
                if variadic || !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            Ok(())
        })?;
        if self.peek_is(0, Keyword::Order) {
            self.parse_sort_clause()?;
        }
        Ok(())
    }

    /// `a_expr` or `name := a_expr` / `name => a_expr`.
    fn parse_func_arg(&mut self) -> PResult {
        let named = self.peek_kind(0).is_word()
            && matches!(
                self.peek_kind(1),
                TokenKind::ColonEquals | TokenKind::EqualsGreater
            );
        if named {
            self.node(Rule::NamedArg, |p| {
                p.parse_type_function_name("named argument")?;
                p.advance();
                p.parse_a_expr()
            })
        } else {
            self.parse_a_expr()
        }
    }

    // --- Window specifications ---

    /// `( [name] [PARTITION BY ...] [ORDER BY ...] [frame] )`.
    pub(super) fn parse_window_spec(&mut self) -> PResult {
        self.node(Rule::WindowSpec, |p| {
            let has_name = p.window_spec_has_name();
            p.expect(TokenKind::LeftParen, "window specification")?;
            if has_name {
                p.parse_col_id("window name")?;
            }
            if p.peek_is(0, Keyword::Partition) {
                p.node(Rule::PartitionClause, |p| {
                    p.advance();
                    p.expect_keyword(Keyword::By, "PARTITION BY")?;
                    p.parse_expr_list()
                })?;
            }
            if p.peek_is(0, Keyword::Order) {
                p.parse_sort_clause()?;
            }
            let unit = match p.peek_keyword(0) {
                Some(Keyword::Range) => Some(FrameUnit::Range),
                Some(Keyword::Rows) => Some(FrameUnit::Rows),
                Some(Keyword::Groups) => Some(FrameUnit::Groups),
                _ => None,
            };
            if let Some(unit) = unit {
                p.parse_frame_clause(unit)?;
            }
            p.expect(TokenKind::RightParen, "window specification")
        })
    }

    /// `RANGE|ROWS|GROUPS {bound | BETWEEN bound AND bound} [EXCLUDE ...]`.
    fn parse_frame_clause(&mut self, unit: FrameUnit) -> PResult {
        self.node(Rule::FrameClause(unit), |p| {
            p.advance();
            if p.eat_keyword(Keyword::Between) {
                p.parse_frame_bound()?;
                p.expect_keyword(Keyword::And, "window frame")?;
            }
            p.parse_frame_bound()?;
            if p.peek_is(0, Keyword::Exclude) {
                p.node(Rule::FrameExclusion, |p| {
                    p.advance();
                    match p.peek_keyword(0) {
                        Some(Keyword::Current) => {
                            p.advance();
                            p.expect_keyword(Keyword::Row, "frame exclusion")
                        }
                        Some(Keyword::Group | Keyword::Ties) => {
                            p.advance();
                            Ok(())
                        }
                        Some(Keyword::No) => {
                            p.advance();
                            p.expect_keyword(Keyword::Others, "frame exclusion")
                        }
                        _ => {
                            p.expect_labels(&["CURRENT", "GROUP", "TIES", "NO"]);
                            Err(p.error_at_current("frame exclusion"))
                        }
                    }
                })?;
            }
            Ok(())
        })
    }

    fn parse_frame_bound(&mut self) -> PResult {
        let unbounded = self.peek_is(0, Keyword::Unbounded);
        if unbounded || (self.peek_is(0, Keyword::Current) && self.peek_is(1, Keyword::Row)) {
            let kind = match (unbounded, self.peek_keyword(1)) {
                (false, _) => FrameBoundKind::CurrentRow,
                (true, Some(Keyword::Following)) => FrameBoundKind::UnboundedFollowing,
                (true, _) => FrameBoundKind::UnboundedPreceding,
            };
            return self.node(Rule::FrameBound(kind), |p| {
                p.advance();
                if unbounded && !p.peek_is(0, Keyword::Preceding) {
                    p.expect_keyword(Keyword::Following, "frame bound")
                } else {
                    p.advance();
                    Ok(())
                }
            });
        }
        let cp = self.builder.checkpoint();
        self.parse_a_expr()?;
        let kind = if self.eat_keyword(Keyword::Preceding) {
            FrameBoundKind::Preceding
        } else {
            self.expect_keyword(Keyword::Following, "frame bound")?;
            FrameBoundKind::Following
        };
        self.wrap(cp, Rule::FrameBound(kind));
        Ok(())
    }

    // --- Functions with dedicated syntax ---

    fn parse_special_function(&mut self, keyword: Keyword) -> PResult {
        let Some(function) = special_function(keyword) else {
            return self.parse_func_call();
        };
        self.node(Rule::SpecialFunction(function), |p| {
            p.advance_n(2);
            let construct = keyword.as_str();
            match function {
                SpecialFunction::Extract => p.parse_extract_args(),
                SpecialFunction::Normalize => {
                    p.parse_a_expr()?;
                    if p.eat(TokenKind::Comma) {
                        if !matches!(
                            p.peek_keyword(0),
                            Some(Keyword::Nfc | Keyword::Nfd | Keyword::Nfkc | Keyword::Nfkd)
                        ) {
                            p.expect_labels(&["NFC", "NFD", "NFKC", "NFKD"]);
                            return Err(p.error_at_current(construct));
                        }
                        p.advance();
                    }
                    Ok(())
                }
                SpecialFunction::Overlay => p.parse_overlay_args(),
                SpecialFunction::Position => {
                    if p.peek_kind(0) != TokenKind::RightParen {
                        p.parse_b_expr()?;
                        p.expect_keyword(Keyword::In, construct)?;
                        p.parse_b_expr()?;
                    }
                    Ok(())
                }
                SpecialFunction::Substring => p.parse_substring_args(),
                SpecialFunction::Treat => {
                    p.parse_a_expr()?;
                    p.expect_keyword(Keyword::As, construct)?;
                    p.parse_type_name()
                }
                SpecialFunction::Trim => p.parse_trim_args(),
                SpecialFunction::NullIf => {
                    p.parse_a_expr()?;
                    p.expect(TokenKind::Comma, construct)?;
                    p.parse_a_expr()
                }
                SpecialFunction::XmlElement => p.parse_xml_element_args(),
                SpecialFunction::XmlExists => p.parse_xml_exists_args(),
                SpecialFunction::XmlForest => p.parse_xml_attribute_list(),
                SpecialFunction::XmlParse => {
                    p.parse_document_or_content(construct)?;
                    p.parse_a_expr()?;
                    if p.peek_is(0, Keyword::Preserve) || p.peek_is(0, Keyword::Strip) {
                        p.advance();
                        p.expect_keyword(Keyword::Whitespace, construct)?;
                    }
                    Ok(())
                }
                SpecialFunction::XmlPi => {
                    p.expect_keyword(Keyword::Name, construct)?;
                    p.parse_col_label(construct)?;
                    if p.eat(TokenKind::Comma) {
                        p.parse_a_expr()?;
                    }
                    Ok(())
                }
                SpecialFunction::XmlRoot => p.parse_xml_root_args(),
                SpecialFunction::XmlSerialize => {
                    p.parse_document_or_content(construct)?;
                    p.parse_a_expr()?;
                    p.expect_keyword(Keyword::As, construct)?;
                    p.node(Rule::TypeName, Self::parse_simple_type_name)
                }
                _ => p.parse_expr_list(),
            }?;
            p.expect(TokenKind::RightParen, construct)
        })
    }

    /// `field FROM a_expr`, or nothing.
    fn parse_extract_args(&mut self) -> PResult {
        if self.peek_kind(0) == TokenKind::RightParen {
            return Ok(());
        }
        if self.peek_kind(0).is_word() || self.peek_kind(0).is_sconst() {
            self.advance();
        } else {
            self.expect_labels(&["identifier", "string"]);
            return Err(self.error_at_current("EXTRACT"));
        }
        self.expect_keyword(Keyword::From, "EXTRACT")?;
        self.parse_a_expr()
    }

    /// `a PLACING b FROM c [FOR d]` or a plain argument list.
    fn parse_overlay_args(&mut self) -> PResult {
        if self.peek_kind(0) == TokenKind::RightParen {
            return Ok(());
        }
        let cp = self.builder.checkpoint();
        self.parse_a_expr()?;
        if self.eat_keyword(Keyword::Placing) {
            self.parse_a_expr()?;
            self.expect_keyword(Keyword::From, "OVERLAY")?;
            self.parse_a_expr()?;
            if self.eat_keyword(Keyword::For) {
                self.parse_a_expr()?;
            }
        } else {
            while self.eat(TokenKind::Comma) {
                self.parse_a_expr()?;
            }
            self.wrap(cp, Rule::ExprList);
        }
        Ok(())
    }

    /// `a FROM b [FOR c]`, `a FOR b [FROM c]`, `a SIMILAR b ESCAPE c` or a
    /// plain argument list.
    fn parse_substring_args(&mut self) -> PResult {
        if self.peek_kind(0) == TokenKind::RightParen {
            return Ok(());
        }
        let cp = self.builder.checkpoint();
        self.parse_a_expr()?;
        match self.peek_keyword(0) {
            Some(Keyword::From) => {
                self.advance();
                self.parse_a_expr()?;
                if self.eat_keyword(Keyword::For) {
                    self.parse_a_expr()?;
                }
            }
            Some(Keyword::For) => {
                self.advance();
                self.parse_a_expr()?;
                if self.eat_keyword(Keyword::From) {
                    self.parse_a_expr()?;
                }
            }
            Some(Keyword::Similar) => {
                self.advance();
                self.parse_a_expr()?;
                self.expect_keyword(Keyword::Escape, "SUBSTRING")?;
                self.parse_a_expr()?;
            }
            _ => {
                while self.eat(TokenKind::Comma) {
                    self.parse_a_expr()?;
                }
                self.wrap(cp, Rule::ExprList);
            }
        }
        Ok(())
    }

    /// `[BOTH|LEADING|TRAILING] [chars] FROM list` or `list`.
    fn parse_trim_args(&mut self) -> PResult {
        if matches!(
            self.peek_keyword(0),
            Some(Keyword::Both | Keyword::Leading | Keyword::Trailing)
        ) {
            self.advance();
        }
        if self.eat_keyword(Keyword::From) {
            return self.parse_expr_list();
        }
        let cp = self.builder.checkpoint();
        self.parse_a_expr()?;
        if self.eat_keyword(Keyword::From) {
            self.parse_expr_list()
        } else {
            while self.eat(TokenKind::Comma) {
                self.parse_a_expr()?;
            }
            self.wrap(cp, Rule::ExprList);
            Ok(())
        }
    }

    fn parse_document_or_content(&mut self, construct: &str) -> PResult {
        if self.peek_is(0, Keyword::Document) || self.peek_is(0, Keyword::Content) {
            self.advance();
            Ok(())
        } else {
            self.expect_labels(&["DOCUMENT", "CONTENT"]);
            Err(self.error_at_current(construct))
        }
    }

    /// `NAME label [, XMLATTRIBUTES (...)] [, expr_list]`.
    fn parse_xml_element_args(&mut self) -> PResult {
        self.expect_keyword(Keyword::Name, "XMLELEMENT")?;
        self.parse_col_label("XMLELEMENT")?;
        if !self.eat(TokenKind::Comma) {
            return Ok(());
        }
        if self.peek_is(0, Keyword::XmlAttributes) {
            self.node(Rule::XmlAttributes, |p| {
                p.advance();
                p.expect(TokenKind::LeftParen, "XMLATTRIBUTES")?;
                p.parse_xml_attribute_list()?;
                p.expect(TokenKind::RightParen, "XMLATTRIBUTES")
            })?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
        self.parse_expr_list()
    }

    /// `expr [AS label], ...`.
    fn parse_xml_attribute_list(&mut self) -> PResult {
        loop {
            self.node(Rule::XmlAttribute, |p| {
                p.parse_a_expr()?;
                if p.eat_keyword(Keyword::As) {
                    p.parse_col_label("XML attribute")?;
                }
                Ok(())
            })?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// `path PASSING [BY REF|VALUE] doc [BY REF|VALUE]`.
    fn parse_xml_exists_args(&mut self) -> PResult {
        self.parse_b_expr()?;
        self.parse_xml_passing()
    }

    /// `PASSING [BY REF|VALUE] expr [BY REF|VALUE]`.
    pub(super) fn parse_xml_passing(&mut self) -> PResult {
        self.node(Rule::XmlPassing, |p| {
            p.expect_keyword(Keyword::Passing, "PASSING clause")?;
            p.parse_opt_xml_passing_mech()?;
            p.parse_b_expr()?;
            p.parse_opt_xml_passing_mech()
        })
    }

    fn parse_opt_xml_passing_mech(&mut self) -> PResult {
        if self.eat_keyword(Keyword::By) {
            if self.peek_is(0, Keyword::Ref) || self.peek_is(0, Keyword::Value) {
                self.advance();
            } else {
                self.expect_labels(&["REF", "VALUE"]);
                return Err(self.error_at_current("PASSING clause"));
            }
        }
        Ok(())
    }

    /// `expr, VERSION {expr | NO VALUE} [, STANDALONE {YES | NO [VALUE]}]`.
    fn parse_xml_root_args(&mut self) -> PResult {
        self.parse_a_expr()?;
        self.expect(TokenKind::Comma, "XMLROOT")?;
        self.expect_keyword(Keyword::Version, "XMLROOT")?;
        if self.peek_is(0, Keyword::No) && self.peek_is(1, Keyword::Value) {
            self.advance_n(2);
        } else {
            self.parse_a_expr()?;
        }
        if self.eat(TokenKind::Comma) {
            self.expect_keyword(Keyword::Standalone, "XMLROOT")?;
            if !self.eat_keyword(Keyword::Yes) {
                self.expect_keyword(Keyword::No, "XMLROOT")?;
                self.eat_keyword(Keyword::Value);
            }
        }
        Ok(())
    }
}

/// The function with dedicated syntax that `keyword(` opens, if any.
const fn special_function(keyword: Keyword) -> Option<SpecialFunction> {
    let function = match keyword {
        Keyword::Extract => SpecialFunction::Extract,
        Keyword::Normalize => SpecialFunction::Normalize,
        Keyword::Overlay => SpecialFunction::Overlay,
        Keyword::Position => SpecialFunction::Position,
        Keyword::Substring => SpecialFunction::Substring,
        Keyword::Treat => SpecialFunction::Treat,
        Keyword::Trim => SpecialFunction::Trim,
        Keyword::NullIf => SpecialFunction::NullIf,
        Keyword::Coalesce => SpecialFunction::Coalesce,
        Keyword::Greatest => SpecialFunction::Greatest,
        Keyword::Least => SpecialFunction::Least,
        Keyword::Grouping => SpecialFunction::Grouping,
        Keyword::XmlConcat => SpecialFunction::XmlConcat,
        Keyword::XmlElement => SpecialFunction::XmlElement,
        Keyword::XmlExists => SpecialFunction::XmlExists,
        Keyword::XmlForest => SpecialFunction::XmlForest,
        Keyword::XmlParse => SpecialFunction::XmlParse,
        Keyword::XmlPi => SpecialFunction::XmlPi,
        Keyword::XmlRoot => SpecialFunction::XmlRoot,
        Keyword::XmlSerialize => SpecialFunction::XmlSerialize,
        _ => return None,
    };
    Some(function)
}

#[cfg(test)]
mod tests {
    use crate::dialect::PostgresDialect;
    use crate::parser::{ErrorKind, Parser, ParserConfig};
    use crate::tree::{ConstKind, ParseNode, RowKind, Rule, SpecialFunction};

    static DIALECT: PostgresDialect = PostgresDialect::new();

    fn expr(sql: &str) -> ParseNode {
        Parser::new(sql, &DIALECT)
            .parse_expression()
            .into_result()
            .unwrap_or_else(|errors| panic!("{sql}: {errors:?}"))
    }

    #[test]
    fn test_constants() {
        assert_eq!(expr("42").rule(), Rule::Const(ConstKind::Integer));
        assert_eq!(expr("1.5e3").rule(), Rule::Const(ConstKind::Decimal));
        assert_eq!(expr("E'a\\'b'").rule(), Rule::Const(ConstKind::String));
        assert_eq!(expr("X'1F'").rule(), Rule::Const(ConstKind::BitString));
        assert_eq!(expr("NULL").rule(), Rule::Const(ConstKind::Null));
        assert_eq!(expr("U&'d!0061t' UESCAPE '!'").rule(), Rule::Const(ConstKind::String));
    }

    #[test]
    fn test_cast_marker_on_numeric_literal() {
        let node = expr("42::int");
        assert_eq!(node.rule(), Rule::TypeCast);
        let rules: Vec<Rule> = node.child_nodes().map(ParseNode::rule).collect();
        assert_eq!(rules, vec![Rule::Const(ConstKind::Integer), Rule::TypeName]);
        assert_eq!(node.text(), "42 :: int");
        assert!(node.structurally_eq(&expr("42 :: int")));
        assert!(expr("1.5::numeric(3, 1)").structurally_eq(&expr("1.5 ::numeric(3, 1)")));
    }

    #[test]
    fn test_parenthesized_forms() {
        assert_eq!(expr("(a + 1)").rule(), Rule::ParenExpr);
        assert_eq!(expr("(a, b)").rule(), Rule::Row(RowKind::Implicit));
        assert_eq!(expr("ROW(a)").rule(), Rule::Row(RowKind::Explicit));
        assert_eq!(expr("ROW()").rule(), Rule::Row(RowKind::Explicit));
        assert_eq!(expr("(SELECT 1)").rule(), Rule::ScalarSubquery);
        assert_eq!(expr("(arr)[1]").rule(), Rule::ParenExpr);
    }

    #[test]
    fn test_empty_parens_are_ambiguous() {
        let result = Parser::new("()", &DIALECT).parse_expression();
        assert_eq!(result.errors()[0].kind, ErrorKind::AmbiguityExhausted);
    }

    #[test]
    fn test_typed_literals() {
        assert_eq!(expr("date '2020-01-01'").rule(), Rule::TypedLiteral);
        assert_eq!(expr("INTERVAL '1' DAY TO HOUR").rule(), Rule::TypedLiteral);
        assert_eq!(expr("TIMESTAMP WITH TIME ZONE 'now'").rule(), Rule::TypedLiteral);
        assert_eq!(expr("time").rule(), Rule::ColumnRef);
    }

    #[test]
    fn test_function_calls() {
        let node = expr("count(DISTINCT a ORDER BY a) FILTER (WHERE a > 0) OVER w");
        assert_eq!(node.rule(), Rule::FuncCall);
        assert!(node.child(Rule::SortClause).is_some());
        assert!(node.child(Rule::FilterClause).is_some());
        assert!(node.child(Rule::OverClause).is_some());
        assert!(expr("f(x => 1, y := 2)").find(|r| r == Rule::NamedArg).is_some());
        assert_eq!(expr("count(*)").rule(), Rule::FuncCall);
        assert!(expr("percentile_cont(0.5) WITHIN GROUP (ORDER BY x)")
            .child(Rule::WithinGroup)
            .is_some());
        assert_eq!(expr("f(VARIADIC arr)").rule(), Rule::FuncCall);
    }

    #[test]
    fn test_window_frames() {
        let node = expr(
            "sum(x) OVER (w PARTITION BY a ORDER BY b \
             ROWS BETWEEN UNBOUNDED PRECEDING AND 2 FOLLOWING EXCLUDE CURRENT ROW)",
        );
        let spec = node.find(|r| r == Rule::WindowSpec).expect("window spec");
        assert!(spec.child(Rule::PartitionClause).is_some());
        let bounds = spec.find_all(|r| matches!(r, Rule::FrameBound(_)));
        assert_eq!(bounds.len(), 2);
        assert!(spec.find(|r| r == Rule::FrameExclusion).is_some());
    }

    #[test]
    fn test_special_functions() {
        let cases = [
            ("EXTRACT(year FROM ts)", SpecialFunction::Extract),
            ("SUBSTRING(s FROM 2 FOR 3)", SpecialFunction::Substring),
            ("TRIM(LEADING 'x' FROM s)", SpecialFunction::Trim),
            ("POSITION('a' IN s)", SpecialFunction::Position),
            ("OVERLAY(s PLACING 'x' FROM 2)", SpecialFunction::Overlay),
            ("COALESCE(a, b, 0)", SpecialFunction::Coalesce),
            ("NULLIF(a, 0)", SpecialFunction::NullIf),
            ("CURRENT_TIMESTAMP(3)", SpecialFunction::CurrentTimestamp),
            ("COLLATION FOR (a)", SpecialFunction::CollationFor),
            ("XMLELEMENT(NAME foo, XMLATTRIBUTES(a AS b), 'x')", SpecialFunction::XmlElement),
            ("XMLEXISTS('//x' PASSING BY REF doc)", SpecialFunction::XmlExists),
            ("XMLROOT(doc, VERSION NO VALUE, STANDALONE YES)", SpecialFunction::XmlRoot),
            ("XMLSERIALIZE(CONTENT doc AS text)", SpecialFunction::XmlSerialize),
        ];
        for (sql, function) in cases {
            assert_eq!(expr(sql).rule(), Rule::SpecialFunction(function), "{sql}");
        }
        assert_eq!(expr("position").rule(), Rule::ColumnRef);
    }

    #[test]
    fn test_case_and_array() {
        let node = expr("CASE WHEN a THEN 1 WHEN b THEN 2 ELSE 3 END");
        assert_eq!(node.find_all(|r| r == Rule::CaseWhen).len(), 2);
        assert!(node.child(Rule::CaseElse).is_some());
        let node = expr("ARRAY[[1, 2], [3, 4]]");
        assert_eq!(node.find_all(|r| r == Rule::ArrayExpr).len(), 3);
        assert_eq!(expr("ARRAY(SELECT 1)").rule(), Rule::ArraySubquery);
        assert_eq!(expr("EXISTS (SELECT 1)").rule(), Rule::Exists);
    }

    #[test]
    fn test_reserved_word_is_not_an_expression() {
        let result = Parser::new("FROM", &DIALECT).parse_expression();
        let error = &result.errors()[0];
        assert!(error.expected.contains(&"identifier".to_string()));
        assert!(error.expected.contains(&"column-name keyword".to_string()));
    }

    #[test]
    fn test_type_func_keyword_needs_call() {
        let result = Parser::new("left", &DIALECT).parse_expression();
        assert!(result.errors()[0].expected.contains(&"'('".to_string()));
        assert!(Parser::new("left('abc', 2)", &DIALECT).parse_expression().is_ok());
    }

    #[test]
    fn test_deep_parens_hit_ceiling() {
        let sql = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        let result =
            Parser::with_config(&sql, &DIALECT, ParserConfig::default().with_max_depth(16))
                .parse_expression();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].kind, ErrorKind::DepthExceeded);
    }
}

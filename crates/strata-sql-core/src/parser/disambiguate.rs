//! Speculative lookahead for alternatives that share a prefix.
//!
//! Every scan saves the stream position, moves forward without touching
//! the tree builder and rewinds before returning. Candidates are tried in
//! declaration order; the first one the scan confirms wins.

use tracing::trace;

use super::parser::{PResult, Parser};
use crate::lexer::{Keyword, KeywordClass, TokenKind};
use crate::parser::ParseError;

/// Reserved keywords that still begin a value expression.
const RESERVED_EXPR_STARTS: &[Keyword] = &[
    Keyword::Not,
    Keyword::Null,
    Keyword::True,
    Keyword::False,
    Keyword::Case,
    Keyword::Cast,
    Keyword::Array,
    Keyword::CurrentDate,
    Keyword::CurrentTime,
    Keyword::CurrentTimestamp,
    Keyword::LocalTime,
    Keyword::LocalTimestamp,
    Keyword::CurrentRole,
    Keyword::CurrentUser,
    Keyword::SessionUser,
    Keyword::User,
    Keyword::CurrentCatalog,
    Keyword::Default,
    Keyword::Unique,
    Keyword::SysDate,
    Keyword::RowNum,
];

/// Tokens allowed right after a `)` that closes one of the leading
/// parentheses of a parenthesized select.
const SELECT_CONTINUATIONS: &[Keyword] = &[
    Keyword::Union,
    Keyword::Intersect,
    Keyword::Except,
    Keyword::Minus,
    Keyword::Order,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::For,
];

/// Keywords that start a query.
const QUERY_STARTS: &[Keyword] = &[
    Keyword::Select,
    Keyword::Values,
    Keyword::With,
    Keyword::Table,
];

/// What a name at the start of an expression turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NameStart {
    /// `name(...)`.
    FunctionCall,
    /// `name 'literal'` or `name(...) 'literal'`.
    TypedLiteral,
    /// `name[.field...]`.
    ColumnRef,
}

/// What a `(` in expression position opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParenForm {
    Subquery,
    ExprOrRow,
}

/// What a `(` in a `FROM` list opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FromParen {
    Subquery,
    JoinedTable,
}

/// What the `(` after `INSERT INTO target` opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InsertParen {
    Columns,
    Query,
}

impl Parser<'_> {
    /// Returns true if the token at `k` can begin a value expression.
    pub(super) fn can_start_expr(&mut self, k: usize) -> bool {
        let token = self.peek(k);
        let (kind, class) = (token.kind, token.class);
        match kind {
            TokenKind::Keyword(keyword) => {
                class != Some(KeywordClass::Reserved) || RESERVED_EXPR_STARTS.contains(&keyword)
            }
            TokenKind::Integer
            | TokenKind::Decimal
            | TokenKind::Param
            | TokenKind::QuestionMark
            | TokenKind::LeftParen
            | TokenKind::Plus
            | TokenKind::Minus => true,
            _ => kind.is_word() || kind.is_string_literal() || kind.is_user_operator(),
        }
    }

    /// Returns true if the token at `k` starts a query.
    pub(super) fn starts_query(&mut self, k: usize) -> bool {
        self.peek_keyword(k)
            .is_some_and(|keyword| QUERY_STARTS.contains(&keyword))
    }

    /// Moves the stream past a balanced parenthesized group starting at
    /// the current `(`. Returns false if the input ends first.
    fn skip_parens(&mut self) -> bool {
        let mut depth = 0usize;
        loop {
            match self.stream.peek_kind(0) {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.stream.skip();
                        return true;
                    }
                }
                TokenKind::Eof | TokenKind::Invalid => return false,
                _ => {}
            }
            self.stream.skip();
        }
    }

    /// Confirms that the current `(` opens a parenthesized select.
    ///
    /// The scan is a single pass: it counts the leading parentheses,
    /// requires a query keyword after them, and then tracks nesting. Each
    /// time one of the leading parentheses closes, the next token must be
    /// another `)` or something that may follow a select inside
    /// parentheses (a set operator, `ORDER`, `LIMIT`, ...).
    pub(super) fn scan_select_in_parens(&mut self) -> bool {
        let mark = self.stream.mark();
        let confirmed = self.scan_select_body();
        self.stream.rewind(mark);
        trace!(
            position = self.stream.position(),
            confirmed,
            "select-in-parens scan"
        );
        confirmed
    }

    fn scan_select_body(&mut self) -> bool {
        let mut depth = 0usize;
        while self.stream.peek_kind(0) == TokenKind::LeftParen {
            self.stream.skip();
            depth += 1;
        }
        if depth == 0 || !self.starts_query(0) {
            return false;
        }
        let mut lowest = depth;
        loop {
            match self.stream.peek_kind(0) {
                TokenKind::Eof | TokenKind::Invalid => return false,
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                    if depth < lowest {
                        lowest = depth;
                        let next = self.stream.peek_kind(1);
                        let continues = next == TokenKind::RightParen
                            || matches!(next, TokenKind::Keyword(k) if SELECT_CONTINUATIONS.contains(&k));
                        if !continues {
                            return false;
                        }
                    }
                }
                _ => {}
            }
            self.stream.skip();
        }
    }

    /// Decides what a `(` in expression position opens.
    pub(super) fn classify_paren(&mut self) -> PResult<ParenForm> {
        let form = if self.scan_select_in_parens() {
            ParenForm::Subquery
        } else if self.can_start_expr(1) {
            ParenForm::ExprOrRow
        } else {
            let found = self.peek(1).clone();
            return Err(ParseError::ambiguity(
                "parenthesized expression",
                &["a subquery", "an expression or row"],
                &found,
            ));
        };
        trace!(?form, "parenthesized expression");
        Ok(form)
    }

    /// Decides what a `(` in a `FROM` list opens.
    pub(super) fn classify_from_paren(&mut self) -> PResult<FromParen> {
        let form = if self.scan_select_in_parens() {
            FromParen::Subquery
        } else if self.peek_kind(1) == TokenKind::LeftParen || self.peek_kind(1).is_word() {
            FromParen::JoinedTable
        } else {
            let found = self.peek(1).clone();
            return Err(ParseError::ambiguity(
                "FROM item",
                &["a subquery", "a parenthesized join"],
                &found,
            ));
        };
        trace!(?form, "FROM parenthesis");
        Ok(form)
    }

    /// Decides what a name at the start of an expression is.
    pub(super) fn classify_name_start(&mut self) -> NameStart {
        let mark = self.stream.mark();
        self.stream.skip();
        while self.stream.peek_kind(0) == TokenKind::Dot && self.stream.peek_kind(1).is_word() {
            self.stream.skip();
            self.stream.skip();
        }
        let decision = match self.stream.peek_kind(0) {
            TokenKind::LeftParen => {
                if self.skip_parens() && self.stream.peek_kind(0).is_sconst() {
                    NameStart::TypedLiteral
                } else {
                    NameStart::FunctionCall
                }
            }
            kind if kind.is_sconst() => NameStart::TypedLiteral,
            _ => NameStart::ColumnRef,
        };
        self.stream.rewind(mark);
        trace!(?decision, "name at expression start");
        decision
    }

    /// Returns true if the type keyword at the current token begins a
    /// typed literal such as `TIMESTAMP(3) WITH TIME ZONE '...'` rather
    /// than a column reference.
    pub(super) fn type_keyword_starts_literal(&mut self) -> bool {
        let mark = self.stream.mark();
        self.stream.skip();
        let mut balanced = true;
        loop {
            match self.stream.peek_kind(0) {
                TokenKind::Keyword(
                    Keyword::Varying
                    | Keyword::Precision
                    | Keyword::Character
                    | Keyword::Char
                    | Keyword::With
                    | Keyword::Without
                    | Keyword::Time
                    | Keyword::Zone,
                ) => self.stream.skip(),
                TokenKind::LeftParen => {
                    if !self.skip_parens() {
                        balanced = false;
                        break;
                    }
                }
                _ => break,
            }
        }
        let literal = balanced && self.stream.peek_kind(0).is_sconst();
        self.stream.rewind(mark);
        trace!(literal, "type keyword at expression start");
        literal
    }

    /// Decides what the `(` after an `INSERT` target opens.
    pub(super) fn classify_insert_paren(&mut self) -> PResult<InsertParen> {
        let mark = self.stream.mark();
        let closed = self.skip_parens();
        let followed_by_query = closed
            && (self.starts_query(0)
                || matches!(
                    self.stream.peek_kind(0),
                    TokenKind::LeftParen
                        | TokenKind::Keyword(Keyword::Overriding | Keyword::Default)
                ));
        self.stream.rewind(mark);

        let decision = if followed_by_query {
            InsertParen::Columns
        } else if self.starts_query(1) || self.peek_kind(1) == TokenKind::LeftParen {
            InsertParen::Query
        } else {
            let found = self.peek(1).clone();
            return Err(ParseError::ambiguity(
                "INSERT statement",
                &["a column list", "a query"],
                &found,
            ));
        };
        trace!(?decision, "INSERT parenthesis");
        Ok(decision)
    }

    /// At the `(` of a function alias: true for a plain column name list,
    /// false for column definitions with types.
    pub(super) fn alias_list_is_names(&mut self) -> bool {
        let first_is_name = self.peek_class(1).is_some_and(KeywordClass::is_col_id);
        let names = first_is_name
            && matches!(
                self.peek_kind(2),
                TokenKind::Comma | TokenKind::RightParen
            );
        trace!(names, "function alias list");
        names
    }

    /// At the `(` of a window specification: true if it starts with the
    /// name of an existing window.
    pub(super) fn window_spec_has_name(&mut self) -> bool {
        let is_name = self.peek_class(1).is_some_and(KeywordClass::is_col_id)
            && !matches!(
                self.peek_keyword(1),
                Some(Keyword::Partition | Keyword::Range | Keyword::Rows | Keyword::Groups)
            );
        trace!(is_name, "window specification");
        is_name
    }
}

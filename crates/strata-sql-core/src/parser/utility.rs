//! Utility statements that sit next to DML: `COPY`, `LOCK`, `DO`,
//! `CHECKPOINT`, `FETCH`/`MOVE`, `SET` and `RESET`.

use super::parser::{PResult, Parser};
use crate::lexer::{Keyword, TokenKind};
use crate::tree::Rule;

impl Parser<'_> {
    // --- COPY ---

    /// `COPY [BINARY] table [(cols)] FROM|TO [PROGRAM] file [options]
    /// [WHERE ...]` or `COPY (query) TO [PROGRAM] file [options]`.
    pub(super) fn parse_copy_stmt(&mut self) -> PResult {
        self.node(Rule::CopyStmt, |p| {
            p.expect_keyword(Keyword::Copy, "COPY statement")?;
            let query = p.peek_kind(0) == TokenKind::LeftParen;
            if query {
                p.nested(|p| {
                    p.advance();
                    p.parse_preparable_stmt()?;
                    p.expect(TokenKind::RightParen, "COPY query")
                })?;
                p.expect_keyword(Keyword::To, "COPY statement")?;
            } else {
                p.eat_keyword(Keyword::Binary);
                p.parse_qualified_name("COPY table")?;
                if p.peek_kind(0) == TokenKind::LeftParen {
                    p.parse_paren_name_list("COPY column list")?;
                }
                if !p.eat_keyword(Keyword::From) {
                    p.expect_keyword(Keyword::To, "COPY statement")?;
                }
            }
            p.eat_keyword(Keyword::Program);
            p.parse_copy_file_name()?;
            if !query && p.eat_keyword(Keyword::Using) {
                p.expect_keyword(Keyword::Delimiters, "COPY delimiter")?;
                p.expect_sconst("COPY delimiter")?;
            }
            p.eat_keyword(Keyword::With);
            p.parse_copy_options()?;
            if !query && p.peek_is(0, Keyword::Where) {
                p.parse_where_clause(false)?;
            }
            Ok(())
        })
    }

    /// A string file name, `STDIN` or `STDOUT`.
    fn parse_copy_file_name(&mut self) -> PResult {
        match self.peek_keyword(0) {
            Some(Keyword::Stdin | Keyword::Stdout) => {
                self.advance();
                Ok(())
            }
            _ => {
                self.expect_labels(&["STDIN", "STDOUT"]);
                self.expect_sconst("COPY file name")
            }
        }
    }

    /// Consumes a string constant.
    fn expect_sconst(&mut self, construct: &str) -> PResult {
        if self.peek_kind(0).is_sconst() {
            self.advance();
            Ok(())
        } else {
            self.expect_label("string constant");
            Err(self.error_at_current(construct))
        }
    }

    /// `( name [arg], ... )` or the legacy keyword options.
    fn parse_copy_options(&mut self) -> PResult {
        if self.peek_kind(0) == TokenKind::LeftParen {
            return self.node(Rule::CopyGenericOptions, |p| {
                p.advance();
                loop {
                    p.parse_copy_generic_option()?;
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
                p.expect(TokenKind::RightParen, "COPY options")
            });
        }
        if !self.peek_is_legacy_copy_option() {
            return Ok(());
        }
        self.node(Rule::CopyOptions, |p| {
            while p.peek_is_legacy_copy_option() {
                p.parse_legacy_copy_option()?;
            }
            Ok(())
        })
    }

    fn peek_is_legacy_copy_option(&mut self) -> bool {
        matches!(
            self.peek_keyword(0),
            Some(
                Keyword::Binary
                    | Keyword::Freeze
                    | Keyword::Delimiter
                    | Keyword::Null
                    | Keyword::Csv
                    | Keyword::Header
                    | Keyword::Quote
                    | Keyword::Escape
                    | Keyword::Force
                    | Keyword::Encoding
                    | Keyword::Oids
            )
        )
    }

    fn parse_legacy_copy_option(&mut self) -> PResult {
        match self.peek_keyword(0) {
            Some(Keyword::Delimiter | Keyword::Null | Keyword::Quote | Keyword::Escape) => {
                self.advance();
                self.eat_keyword(Keyword::As);
                self.expect_sconst("COPY option")
            }
            Some(Keyword::Encoding) => {
                self.advance();
                self.expect_sconst("COPY option")
            }
            Some(Keyword::Force) => {
                self.advance();
                match self.peek_keyword(0) {
                    Some(Keyword::Quote) => {
                        self.advance();
                        if self.eat(TokenKind::Star) {
                            return Ok(());
                        }
                        self.parse_name_list("FORCE QUOTE")
                    }
                    Some(Keyword::Not) => {
                        self.advance();
                        self.expect_keyword(Keyword::Null, "FORCE NOT NULL")?;
                        self.parse_name_list("FORCE NOT NULL")
                    }
                    Some(Keyword::Null) => {
                        self.advance();
                        self.parse_name_list("FORCE NULL")
                    }
                    _ => {
                        self.expect_labels(&["QUOTE", "NOT", "NULL"]);
                        Err(self.error_at_current("FORCE option"))
                    }
                }
            }
            _ => {
                self.advance();
                Ok(())
            }
        }
    }

    /// `label [value | * | (values)]`.
    fn parse_copy_generic_option(&mut self) -> PResult {
        self.node(Rule::CopyGenericOption, |p| {
            p.parse_col_label("COPY option")?;
            match p.peek_kind(0) {
                TokenKind::Comma | TokenKind::RightParen => Ok(()),
                TokenKind::Star => {
                    p.advance();
                    Ok(())
                }
                TokenKind::LeftParen => {
                    p.advance();
                    loop {
                        p.parse_boolean_or_string("COPY option")?;
                        if !p.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                    p.expect(TokenKind::RightParen, "COPY option")
                }
                TokenKind::Integer | TokenKind::Decimal | TokenKind::Plus | TokenKind::Minus => {
                    p.parse_numeric_only("COPY option")
                }
                _ => p.parse_boolean_or_string("COPY option"),
            }
        })
    }

    /// `TRUE`, `FALSE`, `ON`, a non-reserved word or a string.
    pub(super) fn parse_boolean_or_string(&mut self, construct: &str) -> PResult {
        match self.peek_kind(0) {
            TokenKind::Keyword(Keyword::True | Keyword::False | Keyword::On) => {
                self.advance();
                Ok(())
            }
            kind if kind.is_sconst() => {
                self.advance();
                Ok(())
            }
            _ => self.parse_non_reserved_word(construct),
        }
    }

    /// An optionally signed number.
    pub(super) fn parse_numeric_only(&mut self, construct: &str) -> PResult {
        if !self.eat(TokenKind::Plus) {
            self.eat(TokenKind::Minus);
        }
        if self.eat(TokenKind::Integer) {
            return Ok(());
        }
        self.expect(TokenKind::Decimal, construct)
    }

    // --- LOCK ---

    /// `LOCK [TABLE] relations [IN mode MODE] [NOWAIT]`.
    pub(super) fn parse_lock_stmt(&mut self) -> PResult {
        self.node(Rule::LockStmt, |p| {
            p.advance();
            p.eat_keyword(Keyword::Table);
            loop {
                p.parse_relation_expr()?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            if p.peek_is(0, Keyword::In) {
                p.node(Rule::LockMode, |p| {
                    p.advance();
                    p.parse_lock_type()?;
                    p.expect_keyword(Keyword::Mode, "lock mode")
                })?;
            }
            p.eat_keyword(Keyword::NoWait);
            Ok(())
        })
    }

    /// `ACCESS SHARE`, `ROW SHARE`, `ROW EXCLUSIVE`,
    /// `SHARE UPDATE EXCLUSIVE`, `SHARE`, `SHARE ROW EXCLUSIVE`,
    /// `EXCLUSIVE` or `ACCESS EXCLUSIVE`.
    fn parse_lock_type(&mut self) -> PResult {
        match self.peek_keyword(0) {
            Some(Keyword::Access) => {
                self.advance();
                if !self.eat_keyword(Keyword::Share) {
                    self.expect_keyword(Keyword::Exclusive, "lock mode")?;
                }
            }
            Some(Keyword::Row) => {
                self.advance();
                if !self.eat_keyword(Keyword::Share) {
                    self.expect_keyword(Keyword::Exclusive, "lock mode")?;
                }
            }
            Some(Keyword::Share) => {
                self.advance();
                if self.eat_keyword(Keyword::Update) || self.eat_keyword(Keyword::Row) {
                    self.expect_keyword(Keyword::Exclusive, "lock mode")?;
                }
            }
            Some(Keyword::Exclusive) => self.advance(),
            _ => {
                self.expect_labels(&["ACCESS", "ROW", "SHARE", "EXCLUSIVE"]);
                return Err(self.error_at_current("lock mode"));
            }
        }
        Ok(())
    }

    // --- DO, CHECKPOINT ---

    /// `DO [LANGUAGE lang] 'code' [LANGUAGE lang]`.
    pub(super) fn parse_do_stmt(&mut self) -> PResult {
        self.node(Rule::DoStmt, |p| {
            p.advance();
            let mut code = false;
            loop {
                if p.eat_keyword(Keyword::Language) {
                    if p.peek_kind(0).is_sconst() {
                        p.advance();
                    } else {
                        p.parse_non_reserved_word("DO language")?;
                    }
                } else if p.peek_kind(0).is_sconst() {
                    p.advance();
                    code = true;
                } else if code {
                    return Ok(());
                } else {
                    p.expect_label("string constant");
                    return Err(p.error_at_current("DO statement"));
                }
            }
        })
    }

    /// `CHECKPOINT`.
    pub(super) fn parse_checkpoint_stmt(&mut self) -> PResult {
        self.node(Rule::CheckpointStmt, |p| {
            p.advance();
            Ok(())
        })
    }

    // --- FETCH, MOVE ---

    /// `FETCH|MOVE [direction] [FROM|IN] cursor`.
    pub(super) fn parse_fetch_stmt(&mut self) -> PResult {
        self.node(Rule::FetchStmt, |p| {
            p.advance();
            if p.peek_is_fetch_direction() {
                p.node(Rule::FetchDirection, Self::parse_fetch_direction)?;
            }
            if !p.eat_keyword(Keyword::From) {
                p.eat_keyword(Keyword::In);
            }
            p.parse_col_id("cursor name")
        })
    }

    /// A direction keyword or count counts as a direction only when a
    /// cursor name still follows, so `FETCH next` fetches from a cursor
    /// named `next`.
    fn peek_is_fetch_direction(&mut self) -> bool {
        let starts = match self.peek_kind(0) {
            TokenKind::Integer | TokenKind::Plus | TokenKind::Minus => true,
            TokenKind::Keyword(keyword) => matches!(
                keyword,
                Keyword::Next
                    | Keyword::Prior
                    | Keyword::First
                    | Keyword::Last
                    | Keyword::Absolute
                    | Keyword::Relative
                    | Keyword::All
                    | Keyword::Forward
                    | Keyword::Backward
            ),
            _ => false,
        };
        starts && !matches!(self.peek_kind(1), TokenKind::Eof | TokenKind::Semicolon)
    }

    fn parse_fetch_direction(&mut self) -> PResult {
        match self.peek_keyword(0) {
            Some(Keyword::Absolute | Keyword::Relative) => {
                self.advance();
                self.parse_signed_iconst("fetch direction")
            }
            Some(Keyword::Forward | Keyword::Backward) => {
                self.advance();
                if !self.eat_keyword(Keyword::All)
                    && matches!(
                        self.peek_kind(0),
                        TokenKind::Integer | TokenKind::Plus | TokenKind::Minus
                    )
                {
                    self.parse_signed_iconst("fetch direction")?;
                }
                Ok(())
            }
            Some(_) => {
                self.advance();
                Ok(())
            }
            None => self.parse_signed_iconst("fetch direction"),
        }
    }

    pub(super) fn parse_signed_iconst(&mut self, construct: &str) -> PResult {
        if !self.eat(TokenKind::Plus) {
            self.eat(TokenKind::Minus);
        }
        self.expect(TokenKind::Integer, construct)
    }

    // --- SET, RESET ---

    /// `SET [SESSION|LOCAL] ...`.
    pub(super) fn parse_variable_set_stmt(&mut self) -> PResult {
        self.node(Rule::VariableSetStmt, |p| {
            p.advance();
            let scoped = matches!(p.peek_keyword(0), Some(Keyword::Session | Keyword::Local))
                && !matches!(p.peek_keyword(1), Some(Keyword::Authorization | Keyword::Characteristics));
            if scoped {
                p.advance();
            }
            p.parse_set_rest()
        })
    }

    fn parse_set_rest(&mut self) -> PResult {
        match self.peek_keyword(0) {
            Some(Keyword::Time) if self.peek_is(1, Keyword::Zone) => {
                self.advance_n(2);
                self.parse_zone_value()
            }
            Some(Keyword::Schema) => {
                self.advance();
                self.expect_sconst("SET SCHEMA")
            }
            Some(Keyword::Names) => {
                self.advance();
                if !self.eat_keyword(Keyword::Default) && self.peek_kind(0).is_sconst() {
                    self.advance();
                }
                Ok(())
            }
            Some(Keyword::Role) => {
                self.advance();
                self.parse_word_or_sconst("SET ROLE")
            }
            Some(Keyword::Session) if self.peek_is(1, Keyword::Authorization) => {
                self.advance_n(2);
                if self.eat_keyword(Keyword::Default) {
                    return Ok(());
                }
                self.parse_word_or_sconst("SET SESSION AUTHORIZATION")
            }
            Some(Keyword::Session) if self.peek_is(1, Keyword::Characteristics) => {
                self.advance_n(2);
                self.expect_keyword(Keyword::As, "SET SESSION CHARACTERISTICS")?;
                self.expect_keyword(Keyword::Transaction, "SET SESSION CHARACTERISTICS")?;
                self.parse_transaction_mode_list()
            }
            Some(Keyword::Transaction) => {
                self.advance();
                if self.eat_keyword(Keyword::Snapshot) {
                    return self.expect_sconst("SET TRANSACTION SNAPSHOT");
                }
                self.parse_transaction_mode_list()
            }
            Some(Keyword::Xml) if self.peek_is(1, Keyword::Option) => {
                self.advance_n(2);
                if !self.eat_keyword(Keyword::Document) {
                    self.expect_keyword(Keyword::Content, "SET XML OPTION")?;
                }
                Ok(())
            }
            _ => {
                self.parse_var_name()?;
                if self.eat_keyword(Keyword::From) {
                    return self.expect_keyword(Keyword::Current, "SET ... FROM CURRENT");
                }
                if !self.eat_keyword(Keyword::To) {
                    self.expect(TokenKind::Eq, "SET statement")?;
                }
                if self.eat_keyword(Keyword::Default) {
                    return Ok(());
                }
                self.node(Rule::VarValue, |p| loop {
                    p.parse_var_value()?;
                    if !p.eat(TokenKind::Comma) {
                        return Ok(());
                    }
                })
            }
        }
    }

    /// `mode [[,] mode]*`.
    fn parse_transaction_mode_list(&mut self) -> PResult {
        self.node(Rule::TransactionModeList, |p| {
            p.parse_transaction_mode()?;
            loop {
                let comma = p.eat(TokenKind::Comma);
                let more = matches!(
                    p.peek_keyword(0),
                    Some(Keyword::Isolation | Keyword::Read | Keyword::Deferrable | Keyword::Not)
                );
                if !comma && !more {
                    return Ok(());
                }
                p.parse_transaction_mode()?;
            }
        })
    }

    fn parse_transaction_mode(&mut self) -> PResult {
        const CONSTRUCT: &str = "transaction mode";
        self.node(Rule::TransactionMode, |p| match p.peek_keyword(0) {
            Some(Keyword::Isolation) => {
                p.advance();
                p.expect_keyword(Keyword::Level, "ISOLATION LEVEL")?;
                match p.peek_keyword(0) {
                    Some(Keyword::Serializable) => {
                        p.advance();
                        Ok(())
                    }
                    Some(Keyword::Repeatable) => {
                        p.advance();
                        p.expect_keyword(Keyword::Read, "ISOLATION LEVEL")
                    }
                    Some(Keyword::Read) => {
                        p.advance();
                        if p.eat_keyword(Keyword::Committed) {
                            return Ok(());
                        }
                        p.expect_keyword(Keyword::Uncommitted, "ISOLATION LEVEL")
                    }
                    _ => {
                        p.expect_labels(&["SERIALIZABLE", "REPEATABLE", "READ"]);
                        Err(p.error_at_current("ISOLATION LEVEL"))
                    }
                }
            }
            Some(Keyword::Read) => {
                p.advance();
                if p.eat_keyword(Keyword::Only) {
                    return Ok(());
                }
                p.expect_keyword(Keyword::Write, CONSTRUCT)
            }
            Some(Keyword::Not) => {
                p.advance();
                p.expect_keyword(Keyword::Deferrable, CONSTRUCT)
            }
            Some(Keyword::Deferrable) => {
                p.advance();
                Ok(())
            }
            _ => {
                p.expect_labels(&["ISOLATION", "READ", "DEFERRABLE", "NOT"]);
                Err(p.error_at_current(CONSTRUCT))
            }
        })
    }

    /// `ColId [. ColId]*`.
    fn parse_var_name(&mut self) -> PResult {
        self.parse_col_id("configuration parameter")?;
        while self.eat(TokenKind::Dot) {
            self.parse_col_id("configuration parameter")?;
        }
        Ok(())
    }

    fn parse_var_value(&mut self) -> PResult {
        match self.peek_kind(0) {
            TokenKind::Integer | TokenKind::Decimal | TokenKind::Plus | TokenKind::Minus => {
                self.parse_numeric_only("configuration value")
            }
            _ => self.parse_boolean_or_string("configuration value"),
        }
    }

    fn parse_word_or_sconst(&mut self, construct: &str) -> PResult {
        if self.peek_kind(0).is_sconst() {
            self.advance();
            Ok(())
        } else {
            self.parse_non_reserved_word(construct)
        }
    }

    /// The value of `SET TIME ZONE`.
    fn parse_zone_value(&mut self) -> PResult {
        match self.peek_kind(0) {
            TokenKind::Keyword(Keyword::Default | Keyword::Local) => {
                self.advance();
                Ok(())
            }
            TokenKind::Keyword(Keyword::Interval) => {
                self.advance();
                self.expect_sconst("time zone interval")?;
                self.parse_opt_interval_fields()
            }
            TokenKind::Integer | TokenKind::Decimal | TokenKind::Plus | TokenKind::Minus => {
                self.parse_numeric_only("time zone")
            }
            kind if kind.is_sconst() => {
                self.advance();
                Ok(())
            }
            _ => self.parse_col_id("time zone"),
        }
    }

    /// `RESET name | TIME ZONE | TRANSACTION ISOLATION LEVEL |
    /// SESSION AUTHORIZATION | ALL`.
    pub(super) fn parse_variable_reset_stmt(&mut self) -> PResult {
        self.node(Rule::VariableResetStmt, |p| {
            p.advance();
            match p.peek_keyword(0) {
                Some(Keyword::All) => {
                    p.advance();
                    Ok(())
                }
                Some(Keyword::Time) if p.peek_is(1, Keyword::Zone) => {
                    p.advance_n(2);
                    Ok(())
                }
                Some(Keyword::Transaction) if p.peek_is(1, Keyword::Isolation) => {
                    p.advance_n(2);
                    p.expect_keyword(Keyword::Level, "RESET TRANSACTION ISOLATION LEVEL")
                }
                Some(Keyword::Session) if p.peek_is(1, Keyword::Authorization) => {
                    p.advance_n(2);
                    Ok(())
                }
                _ => p.parse_var_name(),
            }
        })
    }
}

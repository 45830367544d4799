//! SQL Parser implementation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ErrorReporter, ParseError};
use super::pratt::ExprMode;
use super::result::ParseResult;
use crate::dialect::{Dialect, PrecedenceTable};
use crate::lexer::{Keyword, KeywordClass, Token, TokenKind, TokenStream};
use crate::tree::{Checkpoint, Rule, TreeBuilder};

/// Result type of the grammar routines.
pub(super) type PResult<T = ()> = Result<T, ParseError>;

/// Default nesting ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Diagnostic labels of the name classes accepted as `ColId`.
pub(super) const COL_ID_LABELS: &[&str] = &[
    KeywordClass::PlainIdentifier.describe(),
    KeywordClass::Unreserved.describe(),
    KeywordClass::ColumnName.describe(),
];

/// Diagnostic labels of the name classes accepted as `type_function_name`.
pub(super) const TYPE_FUNCTION_NAME_LABELS: &[&str] = &[
    KeywordClass::PlainIdentifier.describe(),
    KeywordClass::Unreserved.describe(),
    KeywordClass::TypeFuncName.describe(),
];

/// Keywords that may start a statement.
const STATEMENT_STARTS: &[Keyword] = &[
    Keyword::Select,
    Keyword::Values,
    Keyword::Table,
    Keyword::With,
    Keyword::Insert,
    Keyword::Update,
    Keyword::Delete,
    Keyword::Copy,
    Keyword::Lock,
    Keyword::Do,
    Keyword::Checkpoint,
    Keyword::Fetch,
    Keyword::Move,
    Keyword::Set,
    Keyword::Reset,
    Keyword::Create,
    Keyword::Alter,
    Keyword::Drop,
    Keyword::Truncate,
];

/// Parser settings.
///
/// Deserializes from a partial document; missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum nesting of expressions, parenthesized selects and
    /// parenthesized table references before the parse fails with
    /// `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Sets the nesting ceiling.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// SQL Parser.
///
/// A parser owns the token stream of one input and builds one tree per
/// statement. It is a recursive descent parser whose left-recursive
/// productions are loops driven by the dialect's precedence table.
pub struct Parser<'a> {
    pub(super) stream: TokenStream<'a>,
    pub(super) builder: TreeBuilder,
    dialect: &'a dyn Dialect,
    config: ParserConfig,
    depth: usize,
    /// Labels of what would have been accepted at `expected_at`.
    expected: BTreeSet<&'static str>,
    expected_at: usize,
    source: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(source: &'a str, dialect: &'a dyn Dialect) -> Self {
        Self::with_config(source, dialect, ParserConfig::default())
    }

    /// Creates a parser with explicit settings.
    #[must_use]
    pub fn with_config(source: &'a str, dialect: &'a dyn Dialect, config: ParserConfig) -> Self {
        Self {
            stream: TokenStream::new(source, dialect.keywords()),
            builder: TreeBuilder::new(),
            dialect,
            config,
            depth: 0,
            expected: BTreeSet::new(),
            expected_at: 0,
            source,
        }
    }

    /// Parses a single SQL statement, optionally terminated by `;`.
    pub fn parse_statement(&mut self) -> ParseResult {
        debug!(
            dialect = self.dialect.name(),
            len = self.source.len(),
            "parsing statement"
        );
        let outcome = self
            .statement()
            .and_then(|_| self.expect_end("statement"));
        let result = self.conclude(outcome);
        debug!(ok = result.is_ok(), "statement parsed");
        result
    }

    /// Parses a standalone value expression.
    pub fn parse_expression(&mut self) -> ParseResult {
        debug!(
            dialect = self.dialect.name(),
            len = self.source.len(),
            "parsing expression"
        );
        let outcome = self
            .parse_a_expr()
            .and_then(|()| self.expect_end("expression"));
        self.conclude(outcome)
    }

    /// Parses `;`-separated statements, one result per statement.
    ///
    /// A statement that fails does not stop the script: parsing resumes
    /// after the next `;` outside parentheses.
    pub fn parse_script(&mut self) -> Vec<ParseResult> {
        debug!(
            dialect = self.dialect.name(),
            len = self.source.len(),
            "parsing script"
        );
        let mut results = Vec::new();
        loop {
            while self.stream.peek_kind(0) == TokenKind::Semicolon {
                self.stream.consume();
            }
            if self.stream.peek_kind(0) == TokenKind::Eof {
                break;
            }
            if self.stream.peek_kind(0) == TokenKind::Invalid && !results.is_empty() {
                let outcome = Err(self.error_at_current("statement"));
                results.push(self.conclude(outcome));
                break;
            }
            self.builder = TreeBuilder::new();
            self.depth = 0;
            self.expected.clear();
            let outcome = self.statement().and_then(|terminated| {
                if terminated || self.check(TokenKind::Eof) {
                    Ok(())
                } else {
                    self.expect_label(TokenKind::Semicolon.describe());
                    Err(self.error_at_current("statement"))
                }
            });
            let failed = outcome.is_err();
            results.push(self.conclude(outcome));
            if failed {
                if self.stream.at_end() {
                    break;
                }
                self.skip_to_next_statement();
            }
        }
        debug!(
            statements = results.len(),
            failed = results.iter().filter(|r| !r.is_ok()).count(),
            "script parsed"
        );
        results
    }

    /// `stmt [;]`, wrapped in a `Statement` node. Returns whether the
    /// `;` was present.
    fn statement(&mut self) -> PResult<bool> {
        self.builder.start_node(Rule::Statement);
        self.parse_stmt()?;
        let terminated = self.eat(TokenKind::Semicolon);
        self.builder.finish_node();
        Ok(terminated)
    }

    /// Dispatches on the first token of a statement.
    pub(super) fn parse_stmt(&mut self) -> PResult {
        match self.peek_kind(0) {
            TokenKind::LeftParen
            | TokenKind::Keyword(
                Keyword::Select
                | Keyword::Values
                | Keyword::Table
                | Keyword::With
                | Keyword::Insert
                | Keyword::Update
                | Keyword::Delete,
            ) => self.parse_preparable_stmt(),
            TokenKind::Keyword(Keyword::Copy) => self.parse_copy_stmt(),
            TokenKind::Keyword(Keyword::Lock) => self.parse_lock_stmt(),
            TokenKind::Keyword(Keyword::Do) => self.parse_do_stmt(),
            TokenKind::Keyword(Keyword::Checkpoint) => self.parse_checkpoint_stmt(),
            TokenKind::Keyword(Keyword::Fetch | Keyword::Move) => self.parse_fetch_stmt(),
            TokenKind::Keyword(Keyword::Set) => self.parse_variable_set_stmt(),
            TokenKind::Keyword(Keyword::Reset) => self.parse_variable_reset_stmt(),
            TokenKind::Keyword(Keyword::Create) => self.parse_create_stmt(),
            TokenKind::Keyword(Keyword::Alter) => self.parse_alter_stmt(),
            TokenKind::Keyword(Keyword::Drop) => self.parse_drop_stmt(),
            TokenKind::Keyword(Keyword::Truncate) => self.parse_truncate_stmt(),
            _ => {
                for keyword in STATEMENT_STARTS {
                    self.expect_label(keyword.as_str());
                }
                self.expect_label(TokenKind::LeftParen.describe());
                Err(self.error_at_current("statement"))
            }
        }
    }

    fn expect_end(&mut self, construct: &str) -> PResult {
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.error_at_current(construct))
        }
    }

    /// Skips past the next `;` that is not inside parentheses.
    fn skip_to_next_statement(&mut self) {
        let mut depth = 0usize;
        while !self.stream.at_end() {
            match self.stream.consume().kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth = depth.saturating_sub(1),
                TokenKind::Semicolon if depth == 0 => return,
                _ => {}
            }
        }
    }

    /// Turns the outcome of one statement into a [`ParseResult`].
    fn conclude(&mut self, outcome: PResult) -> ParseResult {
        let builder = std::mem::take(&mut self.builder);
        let error = match outcome {
            Ok(()) => match builder.finish() {
                Some(root) => return ParseResult::success(root),
                None => ParseError::syntax("incomplete parse tree", self.peek(0).span),
            },
            Err(error) => error,
        };
        let mut reporter = ErrorReporter::new(self.source);
        reporter.report(error, self.stream.lex_error());
        ParseResult::failure(reporter.into_errors())
    }

    // --- Token helpers ---

    /// The precedence table of the active dialect.
    pub(super) fn precedence(&self) -> &'a PrecedenceTable {
        let dialect: &'a dyn Dialect = self.dialect;
        dialect.precedence()
    }

    /// Returns the token `k` positions ahead.
    pub(super) fn peek(&mut self, k: usize) -> &Token {
        self.stream.peek(k)
    }

    /// Returns the kind of the token `k` positions ahead.
    pub(super) fn peek_kind(&mut self, k: usize) -> TokenKind {
        self.stream.peek_kind(k)
    }

    /// Returns the keyword `k` positions ahead, if it is one.
    pub(super) fn peek_keyword(&mut self, k: usize) -> Option<Keyword> {
        self.stream.peek(k).as_keyword()
    }

    /// Returns true if the token `k` positions ahead is `keyword`, without
    /// recording it as expected.
    pub(super) fn peek_is(&mut self, k: usize, keyword: Keyword) -> bool {
        self.peek_keyword(k) == Some(keyword)
    }

    /// Returns the keyword class of the token `k` positions ahead.
    pub(super) fn peek_class(&mut self, k: usize) -> Option<KeywordClass> {
        self.stream.peek(k).class
    }

    /// Records `label` as acceptable at the current position.
    pub(super) fn expect_label(&mut self, label: &'static str) {
        let pos = self.stream.position();
        if pos > self.expected_at {
            self.expected.clear();
            self.expected_at = pos;
        }
        if pos == self.expected_at {
            self.expected.insert(label);
        }
    }

    /// Records several labels.
    pub(super) fn expect_labels(&mut self, labels: &[&'static str]) {
        for label in labels {
            self.expect_label(label);
        }
    }

    /// Checks if the current token matches the given kind.
    pub(super) fn check(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind(0) == kind {
            true
        } else {
            self.expect_label(kind.describe());
            false
        }
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&mut self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Moves the current token into the tree.
    pub(super) fn advance(&mut self) {
        let token = self.stream.consume();
        self.builder.token(token);
    }

    /// Advances `n` tokens.
    pub(super) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advances if the current token matches.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Advances if the current token is the keyword.
    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(TokenKind::Keyword(keyword))
    }

    /// Expects the current token to be the given kind.
    pub(super) fn expect(&mut self, kind: TokenKind, construct: &str) -> PResult {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error_at_current(construct))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword, construct: &str) -> PResult {
        self.expect(TokenKind::Keyword(keyword), construct)
    }

    /// Builds a syntax error at the current token naming what was
    /// expected there.
    pub(super) fn error_at_current(&mut self, construct: &str) -> ParseError {
        let expected = if self.stream.position() == self.expected_at {
            self.expected.iter().map(ToString::to_string).collect()
        } else {
            Vec::new()
        };
        let found = self.peek(0).clone();
        ParseError::unexpected(construct, expected, &found)
    }

    // --- Tree helpers ---

    /// Runs `f` inside a node of the given rule.
    pub(super) fn node(&mut self, rule: Rule, f: impl FnOnce(&mut Self) -> PResult) -> PResult {
        self.builder.start_node(rule);
        f(self)?;
        self.builder.finish_node();
        Ok(())
    }

    /// Runs `f` inside a node that also adopts everything since `cp`.
    pub(super) fn node_at(
        &mut self,
        cp: Checkpoint,
        rule: Rule,
        f: impl FnOnce(&mut Self) -> PResult,
    ) -> PResult {
        self.builder.start_node_at(cp, rule);
        f(self)?;
        self.builder.finish_node();
        Ok(())
    }

    /// Wraps everything pushed since `cp` in a node.
    pub(super) fn wrap(&mut self, cp: Checkpoint, rule: Rule) {
        self.builder.start_node_at(cp, rule);
        self.builder.finish_node();
    }

    /// Wraps a single token in a node.
    pub(super) fn token_node(&mut self, rule: Rule) {
        self.builder.start_node(rule);
        self.advance();
        self.builder.finish_node();
    }

    /// Runs `f` one nesting level deeper, failing with `DepthExceeded` at
    /// the configured ceiling.
    pub(super) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.config.max_depth {
            let span = self.peek(0).span;
            debug!(
                max_depth = self.config.max_depth,
                position = span.start,
                "nesting ceiling reached"
            );
            return Err(ParseError::depth_exceeded(self.config.max_depth, span));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// `a_expr`: the full expression grammar.
    pub(super) fn parse_a_expr(&mut self) -> PResult {
        self.parse_expr_bp(0, ExprMode::Full)
    }

    /// `b_expr`: expressions without boolean connectives and predicates.
    pub(super) fn parse_b_expr(&mut self) -> PResult {
        self.parse_expr_bp(0, ExprMode::Restricted)
    }

    /// `a_expr (, a_expr)*` wrapped in an `ExprList` node.
    pub(super) fn parse_expr_list(&mut self) -> PResult {
        self.node(Rule::ExprList, |p| {
            p.parse_a_expr()?;
            while p.eat(TokenKind::Comma) {
                p.parse_a_expr()?;
            }
            Ok(())
        })
    }

    /// `( expr_list )`.
    pub(super) fn parse_paren_expr_list(&mut self, construct: &str) -> PResult {
        self.expect(TokenKind::LeftParen, construct)?;
        self.parse_expr_list()?;
        self.expect(TokenKind::RightParen, construct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::PostgresDialect;
    use crate::parser::ErrorKind;

    static DIALECT: PostgresDialect = PostgresDialect::new();

    #[test]
    fn test_config_defaults_and_builder() {
        assert_eq!(ParserConfig::default().max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(ParserConfig::default().with_max_depth(8).max_depth, 8);
    }

    #[test]
    fn test_config_deserializes_partial_document() {
        let config: ParserConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config, ParserConfig::default());
        let config: ParserConfig =
            serde_json::from_str(r#"{"max_depth": 12}"#).expect("valid config");
        assert_eq!(config.max_depth, 12);
    }

    #[test]
    fn test_statement_root_and_semicolon() {
        let result = Parser::new("SELECT 1;", &DIALECT).parse_statement();
        let root = result.root().expect("parses");
        assert_eq!(root.rule(), Rule::Statement);
        assert_eq!(root.text(), "SELECT 1 ;");
        assert_eq!(
            root.child_nodes().next().map(crate::tree::ParseNode::rule),
            Some(Rule::SelectStmt)
        );
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        let result = Parser::new("SELECT 1; SELECT 2", &DIALECT).parse_statement();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].kind, ErrorKind::Syntax);
        assert!(result.errors()[0]
            .expected
            .contains(&"end of input".to_string()));
    }

    #[test]
    fn test_unknown_statement_lists_starts() {
        let result = Parser::new("GRANT x", &DIALECT).parse_statement();
        let error = &result.errors()[0];
        assert!(error.expected.contains(&"SELECT".to_string()));
        assert!(error.expected.contains(&"INSERT".to_string()));
        assert_eq!(error.found.as_deref(), Some("GRANT"));
    }

    #[test]
    fn test_script_recovers_at_semicolon() {
        let results =
            Parser::new("SELECT 1; SELECT FROM WHERE (; ); SELECT 3;;", &DIALECT).parse_script();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(!results[1].is_ok());
        assert!(results[2].is_ok());
        assert_eq!(results[2].root().map(crate::tree::ParseNode::text).as_deref(), Some("SELECT 3 ;"));
    }

    #[test]
    fn test_script_accepts_every_terminated_statement() {
        let results = Parser::new("SELECT 1; SELECT 2;\nSELECT 3", &DIALECT).parse_script();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(ParseResult::is_ok), "{results:?}");

        let results = Parser::new("SELECT 1 SELECT 2", &DIALECT).parse_script();
        let error = &results[0].errors()[0];
        assert_eq!(error.found.as_deref(), Some("SELECT"));
        assert!(error.expected.contains(&"';'".to_string()));
    }

    #[test]
    fn test_script_stops_at_lexical_error() {
        let results = Parser::new("SELECT 1; SELECT 'open", &DIALECT).parse_script();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1].errors()[0].kind, ErrorKind::Lexical);
    }
}

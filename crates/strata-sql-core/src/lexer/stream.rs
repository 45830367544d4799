//! Buffered token stream with lookahead and backtracking.

use tracing::debug;

use super::{KeywordTable, Lexer, Span, Token, TokenKind};
use crate::parser::ParseError;

/// Returned by [`TokenStream::peek`] if the buffer is somehow empty.
static END: Token = Token {
    kind: TokenKind::Eof,
    text: String::new(),
    span: Span { start: 0, end: 0 },
    class: None,
};

/// A saved stream position, restored with [`TokenStream::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

/// Pull-based token buffer over a [`Lexer`].
///
/// Tokens are lexed on demand and kept, so rewinding never re-lexes. The
/// first lexical error ends the stream: it is stored, and an
/// [`TokenKind::Invalid`] token stands in for the rest of the input.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    buffer: Vec<Token>,
    pos: usize,
    lex_error: Option<ParseError>,
    exhausted: bool,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `input` classified by `keywords`.
    #[must_use]
    pub fn new(input: &'a str, keywords: &'a KeywordTable) -> Self {
        Self {
            lexer: Lexer::new(input, keywords),
            buffer: Vec::new(),
            pos: 0,
            lex_error: None,
            exhausted: false,
        }
    }

    /// Lexes until the buffer holds `index` or the input ends.
    fn fill(&mut self, index: usize) {
        while self.buffer.len() <= index && !self.exhausted {
            match self.lexer.next_token() {
                Ok(token) => {
                    self.exhausted = token.is_eof();
                    self.buffer.push(token);
                }
                Err(error) => {
                    let at = error.span.start;
                    debug!(position = at, message = %error.message, "lexical error");
                    self.buffer
                        .push(Token::new(TokenKind::Invalid, "", Span::empty(at)));
                    self.lex_error = Some(error);
                    self.exhausted = true;
                }
            }
        }
    }

    /// Returns the token `k` positions ahead without consuming anything.
    ///
    /// Looking past the end keeps returning the final `Eof` (or `Invalid`)
    /// token.
    pub fn peek(&mut self, k: usize) -> &Token {
        let index = self.pos + k;
        self.fill(index);
        self.buffer
            .get(index)
            .or_else(|| self.buffer.last())
            .unwrap_or(&END)
    }

    /// Returns the kind of the token `k` positions ahead.
    pub fn peek_kind(&mut self, k: usize) -> TokenKind {
        self.peek(k).kind
    }

    /// Consumes and returns the current token. The final `Eof` or `Invalid`
    /// token is never consumed past.
    pub fn consume(&mut self) -> Token {
        let token = self.peek(0).clone();
        if !matches!(token.kind, TokenKind::Eof | TokenKind::Invalid) {
            self.pos += 1;
        }
        token
    }

    /// Moves past the current token without returning it.
    pub fn skip(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    /// Saves the current position.
    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// Restores a position saved by [`TokenStream::mark`].
    pub fn rewind(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true at the end of input or at a lexical error.
    pub fn at_end(&mut self) -> bool {
        matches!(self.peek_kind(0), TokenKind::Eof | TokenKind::Invalid)
    }

    /// The lexical error that ended the stream, if any.
    #[must_use]
    pub const fn lex_error(&self) -> Option<&ParseError> {
        self.lex_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Dialect, PostgresDialect};
    use crate::lexer::Keyword;

    static DIALECT: PostgresDialect = PostgresDialect::new();

    #[test]
    fn test_peek_does_not_consume() {
        let mut stream = TokenStream::new("SELECT a FROM t", DIALECT.keywords());
        assert_eq!(stream.peek_kind(0), TokenKind::Keyword(Keyword::Select));
        assert_eq!(stream.peek_kind(2), TokenKind::Keyword(Keyword::From));
        assert_eq!(stream.peek(3).text, "t");
        assert_eq!(stream.peek_kind(10), TokenKind::Eof);
        assert_eq!(stream.position(), 0);
        assert_eq!(stream.consume().text, "SELECT");
        assert_eq!(stream.peek(0).text, "a");
    }

    #[test]
    fn test_mark_and_rewind() {
        let mut stream = TokenStream::new("a + b", DIALECT.keywords());
        let mark = stream.mark();
        stream.consume();
        stream.consume();
        assert_eq!(stream.peek(0).text, "b");
        stream.rewind(mark);
        assert_eq!(stream.peek(0).text, "a");
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_skip_moves_without_cloning() {
        let mut stream = TokenStream::new("a b", DIALECT.keywords());
        stream.skip();
        assert_eq!(stream.peek(0).text, "b");
        stream.skip();
        stream.skip();
        assert!(stream.at_end());
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn test_consume_stops_at_end() {
        let mut stream = TokenStream::new("x", DIALECT.keywords());
        stream.consume();
        assert!(stream.consume().is_eof());
        assert!(stream.consume().is_eof());
        assert_eq!(stream.position(), 1);
        assert!(stream.at_end());
    }

    #[test]
    fn test_lexical_error_becomes_invalid_token() {
        let mut stream = TokenStream::new("a { b", DIALECT.keywords());
        assert_eq!(stream.peek(0).text, "a");
        assert_eq!(stream.peek_kind(1), TokenKind::Invalid);
        assert_eq!(stream.peek_kind(5), TokenKind::Invalid);
        let error = stream.lex_error().expect("lexical error recorded");
        assert_eq!(error.span.start, 2);
    }
}

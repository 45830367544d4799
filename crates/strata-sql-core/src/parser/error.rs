//! Parser error types.

use std::fmt;

use serde::Serialize;

use crate::lexer::{Span, Token, TokenKind};

/// The category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Unrecognized character or unterminated literal.
    Lexical,
    /// No grammar alternative matched.
    Syntax,
    /// Speculative lookahead confirmed none of the candidate alternatives.
    AmbiguityExhausted,
    /// The recursion ceiling was reached.
    DepthExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::AmbiguityExhausted => "ambiguous syntax",
            Self::DepthExceeded => "nesting too deep",
        })
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind} at line {line}, column {column}: {message}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// 1-based line of `span.start`, or 0 before
    /// [`ParseError::with_location`] ran.
    pub line: usize,
    /// 1-based column of `span.start`, or 0 before
    /// [`ParseError::with_location`] ran.
    pub column: usize,
    /// Labels of the tokens or constructs that would have been accepted.
    pub expected: Vec<String>,
    /// Text of the offending token, if any.
    pub found: Option<String>,
}

impl ParseError {
    fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            line: 0,
            column: 0,
            expected: Vec::new(),
            found: None,
        }
    }

    /// Creates a lexical error.
    #[must_use]
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    /// Creates a syntax error with a free-form message.
    #[must_use]
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    /// Creates an "unexpected token" error while parsing `construct`.
    #[must_use]
    pub fn unexpected(construct: &str, expected: Vec<String>, found: &Token) -> Self {
        let near = describe_found(found);
        let message = if expected.is_empty() {
            format!("unexpected {near} in {construct}")
        } else {
            format!(
                "unexpected {near} in {construct}, expected {}",
                expected.join(", ")
            )
        };
        Self {
            expected,
            found: Some(found.text.clone()),
            ..Self::new(ErrorKind::Syntax, message, found.span)
        }
    }

    /// Creates an error for a decision point where no alternative fits.
    #[must_use]
    pub fn ambiguity(construct: &str, alternatives: &[&str], found: &Token) -> Self {
        let message = format!(
            "cannot parse {construct} at {}: input is neither {}",
            describe_found(found),
            alternatives.join(" nor ")
        );
        Self {
            expected: alternatives.iter().map(|a| (*a).to_string()).collect(),
            found: Some(found.text.clone()),
            ..Self::new(ErrorKind::AmbiguityExhausted, message, found.span)
        }
    }

    /// Creates a recursion ceiling error.
    #[must_use]
    pub fn depth_exceeded(max_depth: usize, span: Span) -> Self {
        Self::new(
            ErrorKind::DepthExceeded,
            format!("nesting exceeds the maximum depth of {max_depth}"),
            span,
        )
    }

    /// Byte offset where the error starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Fills in line and column from the parsed source.
    #[must_use]
    pub fn with_location(mut self, source: &str) -> Self {
        let (line, column) = self.span.line_col(source);
        self.line = line;
        self.column = column;
        self
    }
}

fn describe_found(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_string(),
        _ => format!("\"{}\"", token.text),
    }
}

/// Collects the errors of one parse.
///
/// Lexical errors take priority: a syntax error raised at or after the
/// point where lexing failed is replaced by the lexical error itself.
#[derive(Debug)]
pub struct ErrorReporter<'a> {
    source: &'a str,
    errors: Vec<ParseError>,
}

impl<'a> ErrorReporter<'a> {
    /// Creates a reporter for `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    /// Records `error`, preferring `lexical` when the error was provoked by
    /// it. Duplicates are dropped.
    pub fn report(&mut self, error: ParseError, lexical: Option<&ParseError>) {
        let error = match lexical {
            Some(lex) if error.kind != ErrorKind::Lexical && error.position() >= lex.position() => {
                lex.clone()
            }
            _ => error,
        };
        let error = error.with_location(self.source);
        if !self.errors.contains(&error) {
            self.errors.push(error);
        }
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors reported so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the reporter and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

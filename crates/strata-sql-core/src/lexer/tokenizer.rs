//! SQL tokenizer implementation.

use super::{KeywordTable, Span, Token, TokenKind};
use crate::parser::ParseError;

/// A lexer that tokenizes SQL input.
///
/// Identifier-shaped words are classified through the [`KeywordTable`] of
/// the active dialect.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Keyword classification of the active dialect.
    keywords: &'a KeywordTable,
}

/// Characters that may form an operator.
const fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '~' | '!' | '@' | '#' | '^' | '&' | '|' | '`' | '?' | '+' | '-' | '*' | '/' | '%' | '<'
            | '>' | '='
    )
}

/// Characters that allow a multi-character operator to end in `+` or `-`.
const fn is_operator_special(c: char) -> bool {
    matches!(
        c,
        '~' | '!' | '@' | '#' | '^' | '&' | '|' | '`' | '?' | '%'
    )
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

const fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '$'
}

/// Maps an operator spelling to its token kind.
fn operator_kind(text: &str) -> TokenKind {
    match text {
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        "%" => TokenKind::Percent,
        "^" => TokenKind::Caret,
        "=" => TokenKind::Eq,
        "<>" | "!=" => TokenKind::NotEq,
        "<" => TokenKind::Lt,
        "<=" => TokenKind::LtEq,
        ">" => TokenKind::Gt,
        ">=" => TokenKind::GtEq,
        "=>" => TokenKind::EqualsGreater,
        "||" => TokenKind::Concat,
        "&" => TokenKind::Ampersand,
        "|" => TokenKind::Pipe,
        "#" => TokenKind::Hash,
        "~" => TokenKind::Tilde,
        "<<" => TokenKind::ShiftLeft,
        ">>" => TokenKind::ShiftRight,
        "~*" => TokenKind::TildeStar,
        "!~" => TokenKind::NotTilde,
        "!~*" => TokenKind::NotTildeStar,
        "~~" => TokenKind::DoubleTilde,
        "!~~" => TokenKind::NotDoubleTilde,
        "~~*" => TokenKind::DoubleTildeStar,
        "!~~*" => TokenKind::NotDoubleTildeStar,
        "->" => TokenKind::Arrow,
        "->>" => TokenKind::LongArrow,
        "#>" => TokenKind::HashArrow,
        "#>>" => TokenKind::HashLongArrow,
        "@>" => TokenKind::AtGt,
        "<@" => TokenKind::LtAt,
        "?" => TokenKind::QuestionMark,
        "?|" => TokenKind::QuestionPipe,
        "?&" => TokenKind::QuestionAmpersand,
        "#-" => TokenKind::HashMinus,
        "@?" => TokenKind::AtQuestion,
        "@@" => TokenKind::AtAt,
        _ => TokenKind::Operator,
    }
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str, keywords: &'a KeywordTable) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            keywords,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Returns the character after the next one without advancing.
    fn peek_third(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(2)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::lexical(message, Span::new(self.start, self.pos.max(self.start + 1)))
            .with_location(self.input)
    }

    /// Skips whitespace and comments. Block comments nest.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.start = self.pos;
                self.advance();
                self.advance();
                let mut depth = 1_usize;
                while depth > 0 {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            depth -= 1;
                        }
                        Some('/') if self.peek() == Some('*') => {
                            self.advance();
                            depth += 1;
                        }
                        Some(_) => {}
                        None => return Err(self.error("unterminated /* comment")),
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a token from the text scanned since `start`.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            &self.input[self.start..self.pos],
            Span::new(self.start, self.pos),
        )
    }

    /// Scans an unquoted word and classifies it.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(is_ident_char) {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        match self.keywords.lookup(text) {
            Some((keyword, class)) => {
                Token::keyword(keyword, class, text, Span::new(self.start, self.pos))
            }
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans a double-quoted identifier; `""` escapes a quote.
    fn scan_quoted_identifier(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.advance(); // opening quote
        let body_start = self.pos;
        loop {
            match self.advance() {
                Some('"') if self.peek() == Some('"') => {
                    self.advance();
                }
                Some('"') => break,
                Some(_) => {}
                None => return Err(self.error("unterminated quoted identifier")),
            }
        }
        if self.pos - body_start == 1 {
            return Err(self.error("zero-length delimited identifier"));
        }
        Ok(self.make_token(kind))
    }

    /// Scans a single-quoted body starting at the opening quote, including
    /// continuation segments separated by whitespace containing a newline.
    fn scan_quoted(&mut self, backslash_escapes: bool) -> Result<(), ParseError> {
        loop {
            self.advance(); // opening quote
            loop {
                match self.advance() {
                    Some('\\') if backslash_escapes => {
                        if self.advance().is_none() {
                            return Err(self.error("unterminated quoted string"));
                        }
                    }
                    Some('\'') if self.peek() == Some('\'') => {
                        self.advance();
                    }
                    Some('\'') => break,
                    Some(_) => {}
                    None => return Err(self.error("unterminated quoted string")),
                }
            }

            let resume = self.pos;
            let mut saw_newline = false;
            while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
                saw_newline |= c == '\n';
                self.advance();
            }
            if !(saw_newline && self.peek() == Some('\'')) {
                self.pos = resume;
                return Ok(());
            }
        }
    }

    /// Scans a string literal whose prefix (if any) has been consumed.
    fn scan_string(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.scan_quoted(kind == TokenKind::EscapeString)?;
        let token = self.make_token(kind);
        match kind {
            TokenKind::BitString => self.check_digits(&token, 1, |c| matches!(c, '0' | '1'))?,
            TokenKind::HexString => self.check_digits(&token, 1, |c| c.is_ascii_hexdigit())?,
            _ => {}
        }
        Ok(token)
    }

    fn check_digits(
        &self,
        token: &Token,
        prefix: usize,
        valid: impl Fn(char) -> bool,
    ) -> Result<(), ParseError> {
        let body = &token.text[prefix..];
        let bad = body
            .chars()
            .filter(|&c| c != '\'' && !c.is_whitespace())
            .find(|&c| !valid(c));
        match bad {
            Some(c) => Err(self.error(format!("\"{c}\" is not a valid digit in {}", token.text))),
            None => Ok(()),
        }
    }

    /// Scans an integer or decimal literal, including a trailing `::` cast
    /// marker when one immediately follows.
    fn scan_number(&mut self) -> Token {
        let mut kind = TokenKind::Integer;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next() != Some('.') {
            kind = TokenKind::Decimal;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let has_exponent = match self.peek_next() {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.peek_third().is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if has_exponent {
                kind = TokenKind::Decimal;
                self.advance();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        if self.input[self.pos..].starts_with("::") {
            self.pos += 2;
        }

        self.make_token(kind)
    }

    /// Scans `$1` parameters and `$tag$...$tag$` strings.
    fn scan_dollar(&mut self) -> Result<Token, ParseError> {
        if self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
            return Ok(self.make_token(TokenKind::Param));
        }

        let rest = &self.input[self.pos + 1..];
        let tag_len = if rest.starts_with('$') {
            0
        } else if rest.chars().next().is_some_and(is_ident_start) {
            let end = rest
                .find(|c: char| !is_ident_char(c) || c == '$')
                .unwrap_or(rest.len());
            if !rest[end..].starts_with('$') {
                self.advance();
                return Err(self.error("invalid dollar-quote tag"));
            }
            end
        } else {
            self.advance();
            return Err(self.error("unexpected character '$'"));
        };

        let delimiter = &self.input[self.pos..self.pos + tag_len + 2];
        let body_start = self.pos + delimiter.len();
        match self.input[body_start..].find(delimiter) {
            Some(offset) => {
                self.pos = body_start + offset + delimiter.len();
                Ok(self.make_token(TokenKind::DollarString))
            }
            None => {
                self.pos = self.input.len();
                Err(self.error("unterminated dollar-quoted string"))
            }
        }
    }

    /// Scans an operator using the longest run of operator characters.
    fn scan_operator(&mut self) -> Token {
        let rest = &self.input[self.pos..];
        let mut len = rest
            .find(|c: char| !is_operator_char(c))
            .unwrap_or(rest.len());

        // An operator never swallows the start of a comment.
        for marker in ["--", "/*"] {
            if let Some(at) = rest[..len].find(marker) {
                len = len.min(at.max(1));
            }
        }

        // `=-` is `=` followed by `-`, unless the run has a special char.
        let run = &rest[..len];
        if len > 1 && run.ends_with(['+', '-']) && !run.chars().any(is_operator_special) {
            while len > 1 && rest[..len].ends_with(['+', '-']) {
                len -= 1;
            }
        }

        self.pos += len;
        self.make_token(operator_kind(&rest[..len]))
    }

    /// Returns the next token.
    ///
    /// # Errors
    ///
    /// Returns a lexical `ParseError` for unterminated literals and
    /// comments, malformed literals and unknown characters.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Ok(self.make_token(TokenKind::Eof));
        };
        let next = self.peek_next();

        match c {
            '\'' => self.scan_string(TokenKind::String),
            '"' => self.scan_quoted_identifier(TokenKind::QuotedIdentifier),
            'e' | 'E' if next == Some('\'') => {
                self.advance();
                self.scan_string(TokenKind::EscapeString)
            }
            'b' | 'B' if next == Some('\'') => {
                self.advance();
                self.scan_string(TokenKind::BitString)
            }
            'x' | 'X' if next == Some('\'') => {
                self.advance();
                self.scan_string(TokenKind::HexString)
            }
            'n' | 'N' if next == Some('\'') => {
                self.advance();
                self.scan_string(TokenKind::NationalString)
            }
            'u' | 'U' if next == Some('&') && self.peek_third() == Some('\'') => {
                self.advance();
                self.advance();
                self.scan_string(TokenKind::UnicodeString)
            }
            'u' | 'U' if next == Some('&') && self.peek_third() == Some('"') => {
                self.advance();
                self.advance();
                self.scan_quoted_identifier(TokenKind::UnicodeIdentifier)
            }
            c if is_ident_start(c) => Ok(self.scan_identifier()),
            '0'..='9' => Ok(self.scan_number()),
            '.' if next.is_some_and(|n| n.is_ascii_digit()) => Ok(self.scan_number()),
            '$' => self.scan_dollar(),
            ':' => {
                self.advance();
                let kind = match self.peek() {
                    Some(':') => {
                        self.advance();
                        TokenKind::DoubleColon
                    }
                    Some('=') => {
                        self.advance();
                        TokenKind::ColonEquals
                    }
                    _ => TokenKind::Colon,
                };
                Ok(self.make_token(kind))
            }
            '(' | ')' | '[' | ']' | ',' | ';' | '.' => {
                self.advance();
                let kind = match c {
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    '[' => TokenKind::LeftBracket,
                    ']' => TokenKind::RightBracket,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    _ => TokenKind::Dot,
                };
                Ok(self.make_token(kind))
            }
            c if is_operator_char(c) => Ok(self.scan_operator()),
            other => {
                self.advance();
                Err(self.error(format!("unexpected character '{other}'")))
            }
        }
    }

    /// Tokenizes the entire input; the last token is always `Eof`.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }
}

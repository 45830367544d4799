//! Token definitions.

use super::{Keyword, KeywordClass, Span};

/// Token types.
///
/// Literal values are not decoded here; the raw source text is kept on the
/// [`Token`] so that a parse tree reproduces its input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Names
    /// Unquoted identifier.
    Identifier,
    /// Double-quoted identifier (`"Name"`).
    QuotedIdentifier,
    /// Unicode-escaped identifier (`U&"d\0061t\+000061"`).
    UnicodeIdentifier,
    /// Keyword, as classified by the active dialect.
    Keyword(Keyword),

    // Numeric literals
    /// Integer literal (`42`).
    Integer,
    /// Decimal literal with a fraction and/or exponent (`1.5`, `.5`, `1e3`).
    Decimal,

    // String literals
    /// Standard string (`'text'`).
    String,
    /// Escape string (`E'a\tb'`).
    EscapeString,
    /// National character string (`N'text'`).
    NationalString,
    /// Unicode-escaped string (`U&'\0041'`).
    UnicodeString,
    /// Dollar-quoted string (`$$text$$`, `$fn$text$fn$`).
    DollarString,
    /// Bit-string literal (`B'1010'`).
    BitString,
    /// Hexadecimal bit-string literal (`X'1F'`).
    HexString,

    // Parameters
    /// Positional parameter (`$1`).
    Param,
    /// Parameter marker (`?`), also the JSONB key-exists operator.
    QuestionMark,

    // Arithmetic operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,

    // Comparison operators
    /// `=`
    Eq,
    /// `<>` or `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    // Bitwise and string operators
    /// `||`
    Concat,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `#`
    Hash,
    /// `~`
    Tilde,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,

    // Pattern operators
    /// `~*`
    TildeStar,
    /// `!~`
    NotTilde,
    /// `!~*`
    NotTildeStar,
    /// `~~`
    DoubleTilde,
    /// `!~~`
    NotDoubleTilde,
    /// `~~*`
    DoubleTildeStar,
    /// `!~~*`
    NotDoubleTildeStar,

    // JSON operators
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
    /// `#>`
    HashArrow,
    /// `#>>`
    HashLongArrow,
    /// `@>`
    AtGt,
    /// `<@`
    LtAt,
    /// `?|`
    QuestionPipe,
    /// `?&`
    QuestionAmpersand,
    /// `#-`
    HashMinus,
    /// `@?`
    AtQuestion,
    /// `@@`
    AtAt,

    /// Any other operator spelling (`@`, `!`, `<->`, `&&`, ...).
    Operator,

    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `:=`
    ColonEquals,
    /// `=>`
    EqualsGreater,

    // Special
    /// End of input.
    Eof,
    /// Placeholder for input the lexer could not scan.
    Invalid,
}

impl TokenKind {
    /// Returns true for any string-literal kind, including bit strings.
    #[must_use]
    pub const fn is_string_literal(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::EscapeString
                | Self::NationalString
                | Self::UnicodeString
                | Self::DollarString
                | Self::BitString
                | Self::HexString
        )
    }

    /// Returns true for the literal kinds accepted where the grammar asks
    /// for a character string constant (`Sconst`).
    #[must_use]
    pub const fn is_sconst(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::EscapeString
                | Self::NationalString
                | Self::UnicodeString
                | Self::DollarString
        )
    }

    /// Returns true for identifier-shaped kinds.
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::QuotedIdentifier | Self::UnicodeIdentifier | Self::Keyword(_)
        )
    }

    /// Returns true for the operator kinds that belong to the
    /// user-definable operator class (everything except arithmetic and
    /// comparison).
    #[must_use]
    pub const fn is_user_operator(self) -> bool {
        matches!(
            self,
            Self::Concat
                | Self::Ampersand
                | Self::Pipe
                | Self::Hash
                | Self::Tilde
                | Self::ShiftLeft
                | Self::ShiftRight
                | Self::TildeStar
                | Self::NotTilde
                | Self::NotTildeStar
                | Self::DoubleTilde
                | Self::NotDoubleTilde
                | Self::DoubleTildeStar
                | Self::NotDoubleTildeStar
                | Self::Arrow
                | Self::LongArrow
                | Self::HashArrow
                | Self::HashLongArrow
                | Self::AtGt
                | Self::LtAt
                | Self::QuestionPipe
                | Self::QuestionAmpersand
                | Self::HashMinus
                | Self::AtQuestion
                | Self::AtAt
                | Self::Operator
        )
    }

    /// Short label used in "expected ..." diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::QuotedIdentifier => "quoted identifier",
            Self::UnicodeIdentifier => "unicode identifier",
            Self::Keyword(kw) => kw.as_str(),
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::String
            | Self::EscapeString
            | Self::NationalString
            | Self::UnicodeString
            | Self::DollarString => "string",
            Self::BitString | Self::HexString => "bit string",
            Self::Param => "parameter",
            Self::QuestionMark => "'?'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Caret => "'^'",
            Self::Eq => "'='",
            Self::NotEq => "'<>'",
            Self::Lt => "'<'",
            Self::LtEq => "'<='",
            Self::Gt => "'>'",
            Self::GtEq => "'>='",
            Self::Concat
            | Self::Ampersand
            | Self::Pipe
            | Self::Hash
            | Self::Tilde
            | Self::ShiftLeft
            | Self::ShiftRight
            | Self::TildeStar
            | Self::NotTilde
            | Self::NotTildeStar
            | Self::DoubleTilde
            | Self::NotDoubleTilde
            | Self::DoubleTildeStar
            | Self::NotDoubleTildeStar
            | Self::Arrow
            | Self::LongArrow
            | Self::HashArrow
            | Self::HashLongArrow
            | Self::AtGt
            | Self::LtAt
            | Self::QuestionPipe
            | Self::QuestionAmpersand
            | Self::HashMinus
            | Self::AtQuestion
            | Self::AtAt
            | Self::Operator => "operator",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Dot => "'.'",
            Self::Colon => "':'",
            Self::DoubleColon => "'::'",
            Self::ColonEquals => "':='",
            Self::EqualsGreater => "'=>'",
            Self::Eof => "end of input",
            Self::Invalid => "invalid input",
        }
    }
}

/// A token with its kind, raw text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: String,
    /// The location in the source.
    pub span: Span,
    /// Keyword class, present exactly for identifier-shaped tokens.
    pub class: Option<KeywordClass>,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        let class = match kind {
            TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::UnicodeIdentifier => {
                Some(KeywordClass::PlainIdentifier)
            }
            _ => None,
        };
        Self {
            kind,
            text: text.into(),
            span,
            class,
        }
    }

    /// Creates a keyword token with the class assigned by the dialect.
    #[must_use]
    pub fn keyword(
        keyword: Keyword,
        class: KeywordClass,
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind: TokenKind::Keyword(keyword),
            text: text.into(),
            span,
            class: Some(class),
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true if a numeric literal carries a trailing `::` cast
    /// marker (`42::`).
    #[must_use]
    pub fn has_cast_marker(&self) -> bool {
        matches!(self.kind, TokenKind::Integer | TokenKind::Decimal) && self.text.ends_with("::")
    }

    /// Returns the literal text without a trailing cast marker.
    #[must_use]
    pub fn literal_text(&self) -> &str {
        if self.has_cast_marker() {
            &self.text[..self.text.len() - 2]
        } else {
            &self.text
        }
    }

    /// Splits a literal carrying a cast marker into the literal and a
    /// separate `::` token, so `42::int` and `42 :: int` build the same
    /// tree.
    #[must_use]
    pub fn split_cast_marker(self) -> (Self, Option<Self>) {
        if !self.has_cast_marker() {
            return (self, None);
        }
        let at = self.span.end - 2;
        let literal = Self::new(self.kind, self.literal_text(), Span::new(self.span.start, at));
        let marker = Self::new(TokenKind::DoubleColon, "::", Span::new(at, self.span.end));
        (literal, Some(marker))
    }

    /// Returns the normalized name of an identifier-shaped token.
    ///
    /// Unquoted words fold to lower case; quoted identifiers keep their
    /// case with doubled quotes collapsed. Unicode identifiers are
    /// returned with their escapes intact; see [`Token::decode_unicode`].
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        match self.kind {
            TokenKind::Identifier | TokenKind::Keyword(_) => Some(self.text.to_lowercase()),
            TokenKind::QuotedIdentifier => Some(unquote(&self.text, '"')),
            TokenKind::UnicodeIdentifier => Some(unquote(&self.text[2..], '"')),
            _ => None,
        }
    }

    /// Decodes the escapes of a `U&"..."` identifier or `U&'...'` string
    /// using the given escape character (`\` unless `UESCAPE` says
    /// otherwise). Returns `None` for other tokens or malformed escapes.
    #[must_use]
    pub fn decode_unicode(&self, escape: char) -> Option<String> {
        let body = match self.kind {
            TokenKind::UnicodeIdentifier => unquote(&self.text[2..], '"'),
            TokenKind::UnicodeString => unquote(&self.text[2..], '\''),
            _ => return None,
        };
        decode_unicode_escapes(&body, escape)
    }
}

/// Strips the surrounding quote characters and collapses doubled quotes.
fn unquote(text: &str, quote: char) -> String {
    let inner = text
        .strip_prefix(quote)
        .and_then(|t| t.strip_suffix(quote))
        .unwrap_or(text);
    let doubled: String = [quote, quote].iter().collect();
    inner.replace(&doubled, &quote.to_string())
}

fn decode_unicode_escapes(body: &str, escape: char) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != escape {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(next) if next == escape => {
                chars.next();
                out.push(escape);
            }
            Some('+') => {
                chars.next();
                let hex: String = chars.by_ref().take(6).collect();
                out.push(hex_char(&hex, 6)?);
            }
            Some(_) => {
                let hex: String = chars.by_ref().take(4).collect();
                out.push(hex_char(&hex, 4)?);
            }
            None => return None,
        }
    }
    Some(out)
}

fn hex_char(hex: &str, width: usize) -> Option<char> {
    if hex.len() != width {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

//! Type names: `Typename`, `SimpleTypename` and interval qualifiers.

use super::parser::{PResult, Parser, TYPE_FUNCTION_NAME_LABELS};
use crate::lexer::{Keyword, TokenKind};
use crate::tree::Rule;

/// Keywords that begin a built-in type name.
const TYPE_KEYWORDS: &[Keyword] = &[
    Keyword::Int,
    Keyword::Integer,
    Keyword::SmallInt,
    Keyword::BigInt,
    Keyword::Real,
    Keyword::Float,
    Keyword::Decimal,
    Keyword::Dec,
    Keyword::Numeric,
    Keyword::Boolean,
    Keyword::Bit,
    Keyword::Character,
    Keyword::Char,
    Keyword::VarChar,
    Keyword::National,
    Keyword::NChar,
    Keyword::Timestamp,
    Keyword::Time,
    Keyword::Interval,
];

impl Parser<'_> {
    /// Returns true if the token at `k` starts a built-in type name.
    pub(super) fn peek_is_type_keyword(&mut self, k: usize) -> bool {
        match self.peek_keyword(k) {
            Some(Keyword::Double) => self.peek_is(k + 1, Keyword::Precision),
            Some(keyword) => TYPE_KEYWORDS.contains(&keyword),
            None => false,
        }
    }

    /// Returns true if the token at `k` is an interval field keyword.
    pub(super) fn peek_is_interval_field(&mut self, k: usize) -> bool {
        matches!(
            self.peek_keyword(k),
            Some(
                Keyword::Year
                    | Keyword::Month
                    | Keyword::Day
                    | Keyword::Hour
                    | Keyword::Minute
                    | Keyword::Second
            )
        )
    }

    /// `Typename`: `[SETOF] SimpleTypename [array bounds]`.
    pub(super) fn parse_type_name(&mut self) -> PResult {
        self.node(Rule::TypeName, |p| {
            p.eat_keyword(Keyword::SetOf);
            p.parse_simple_type_name()?;
            p.parse_opt_array_bounds()
        })
    }

    /// `Typename (, Typename)*`.
    pub(super) fn parse_type_list(&mut self) -> PResult {
        self.parse_type_name()?;
        while self.eat(TokenKind::Comma) {
            self.parse_type_name()?;
        }
        Ok(())
    }

    /// `SimpleTypename` without the `TypeName` wrapper.
    pub(super) fn parse_simple_type_name(&mut self) -> PResult {
        match self.peek_keyword(0) {
            Some(
                Keyword::Int
                | Keyword::Integer
                | Keyword::SmallInt
                | Keyword::BigInt
                | Keyword::Real
                | Keyword::Boolean,
            ) => self.node(Rule::NumericType, |p| {
                p.advance();
                Ok(())
            }),
            Some(Keyword::Float) => self.node(Rule::NumericType, |p| {
                p.advance();
                p.parse_opt_type_modifiers()
            }),
            Some(Keyword::Double) if self.peek_is(1, Keyword::Precision) => {
                self.node(Rule::NumericType, |p| {
                    p.advance_n(2);
                    Ok(())
                })
            }
            Some(Keyword::Decimal | Keyword::Dec | Keyword::Numeric) => {
                self.node(Rule::NumericType, |p| {
                    p.advance();
                    p.parse_opt_type_modifiers()
                })
            }
            Some(Keyword::Bit) => self.node(Rule::BitType, |p| {
                p.advance();
                p.eat_keyword(Keyword::Varying);
                p.parse_opt_type_modifiers()
            }),
            Some(
                Keyword::Character
                | Keyword::Char
                | Keyword::VarChar
                | Keyword::National
                | Keyword::NChar,
            ) => self.parse_character_type(),
            Some(Keyword::Timestamp | Keyword::Time) => self.node(Rule::DateTimeType, |p| {
                p.advance();
                p.parse_opt_type_modifiers()?;
                if p.peek_is(0, Keyword::With) || p.peek_is(0, Keyword::Without) {
                    p.advance();
                    p.expect_keyword(Keyword::Time, "time zone qualifier")?;
                    p.expect_keyword(Keyword::Zone, "time zone qualifier")?;
                }
                Ok(())
            }),
            Some(Keyword::Interval) => self.node(Rule::IntervalType, |p| {
                p.advance();
                if p.peek_kind(0) == TokenKind::LeftParen {
                    p.parse_opt_type_modifiers()
                } else {
                    p.parse_opt_interval_fields()
                }
            }),
            _ => self.parse_generic_type(),
        }
    }

    /// `CHARACTER [VARYING]`, `CHAR`, `VARCHAR`, `NATIONAL CHAR[ACTER]`,
    /// `NCHAR`, each with an optional length.
    fn parse_character_type(&mut self) -> PResult {
        self.node(Rule::CharacterType, |p| {
            if p.eat_keyword(Keyword::National) {
                if !(p.eat_keyword(Keyword::Character) || p.eat_keyword(Keyword::Char)) {
                    return Err(p.error_at_current("character type"));
                }
                p.eat_keyword(Keyword::Varying);
            } else if p.eat_keyword(Keyword::VarChar) {
                // no VARYING after VARCHAR
            } else {
                p.advance();
                p.eat_keyword(Keyword::Varying);
            }
            p.parse_opt_type_modifiers()
        })
    }

    /// `type_function_name [.attr]* [( modifiers )]`.
    fn parse_generic_type(&mut self) -> PResult {
        if !self
            .peek_class(0)
            .is_some_and(crate::lexer::KeywordClass::is_type_function_name)
        {
            self.expect_labels(TYPE_FUNCTION_NAME_LABELS);
            self.expect_label("type name");
            return Err(self.error_at_current("type name"));
        }
        self.node(Rule::GenericType, |p| {
            p.node(Rule::QualifiedName, |p| {
                p.advance();
                while p.peek_kind(0) == TokenKind::Dot && p.peek_kind(1).is_word() {
                    p.advance();
                    p.parse_col_label("type name")?;
                }
                Ok(())
            })?;
            p.parse_opt_type_modifiers()
        })
    }

    /// `( expr_list )` after a type name.
    fn parse_opt_type_modifiers(&mut self) -> PResult {
        if self.peek_kind(0) != TokenKind::LeftParen {
            return Ok(());
        }
        self.node(Rule::TypeModifiers, |p| {
            p.parse_paren_expr_list("type modifiers")
        })
    }

    /// `[]`, `[n]` repeated, or `ARRAY [ '[' n ']' ]`.
    fn parse_opt_array_bounds(&mut self) -> PResult {
        match self.peek_kind(0) {
            TokenKind::LeftBracket => self.node(Rule::ArrayBounds, |p| {
                while p.eat(TokenKind::LeftBracket) {
                    p.eat(TokenKind::Integer);
                    p.expect(TokenKind::RightBracket, "array bounds")?;
                }
                Ok(())
            }),
            TokenKind::Keyword(Keyword::Array) => self.node(Rule::ArrayBounds, |p| {
                p.advance();
                if p.eat(TokenKind::LeftBracket) {
                    p.expect(TokenKind::Integer, "array bounds")?;
                    p.expect(TokenKind::RightBracket, "array bounds")?;
                }
                Ok(())
            }),
            _ => Ok(()),
        }
    }

    /// Optional interval qualifier:
    /// `YEAR | MONTH | DAY | HOUR | MINUTE | SECOND [(p)]`, or one of the
    /// `x TO y` ranges.
    pub(super) fn parse_opt_interval_fields(&mut self) -> PResult {
        if !self.peek_is_interval_field(0) {
            return Ok(());
        }
        self.node(Rule::IntervalFields, |p| {
            let first = p.peek_keyword(0);
            p.parse_interval_field()?;
            let ranged = matches!(
                first,
                Some(Keyword::Year | Keyword::Day | Keyword::Hour | Keyword::Minute)
            );
            if ranged && p.eat_keyword(Keyword::To) {
                let allowed: &[Keyword] = match first {
                    Some(Keyword::Year) => &[Keyword::Month],
                    Some(Keyword::Day) => &[Keyword::Hour, Keyword::Minute, Keyword::Second],
                    Some(Keyword::Hour) => &[Keyword::Minute, Keyword::Second],
                    _ => &[Keyword::Second],
                };
                match p.peek_keyword(0) {
                    Some(keyword) if allowed.contains(&keyword) => p.parse_interval_field()?,
                    _ => {
                        for keyword in allowed {
                            p.expect_label(keyword.as_str());
                        }
                        return Err(p.error_at_current("interval qualifier"));
                    }
                }
            }
            Ok(())
        })
    }

    /// One interval field; `SECOND` takes an optional precision.
    fn parse_interval_field(&mut self) -> PResult {
        let second = self.peek_is(0, Keyword::Second);
        self.advance();
        if second && self.eat(TokenKind::LeftParen) {
            self.expect(TokenKind::Integer, "interval precision")?;
            self.expect(TokenKind::RightParen, "interval precision")?;
        }
        Ok(())
    }
}

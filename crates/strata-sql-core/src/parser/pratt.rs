//! Pratt expression parser for operator precedence.
//!
//! Binding powers come from the dialect's [`PrecedenceTable`]; nothing in
//! here hard-codes a number. Every infix form, including the multi-token
//! ones, folds its left operand by reopening the builder at the operand's
//! checkpoint.
//!
//! [`PrecedenceTable`]: crate::dialect::PrecedenceTable

use super::parser::{PResult, Parser};
use crate::dialect::{Associativity, OperatorClass};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::ParseError;
use crate::tree::{
    BetweenMode, BinaryOp, Checkpoint, ExprForm, IsTestKind, PatternOp, PrefixOp, Rule,
    SubqueryQuantifier,
};

/// Which expression grammar is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ExprMode {
    /// `a_expr`: everything.
    Full,
    /// `b_expr`: no boolean connectives, `NOT`, `IS NULL`-style tests,
    /// pattern matching, `BETWEEN`, `IN`, `AT TIME ZONE`, `COLLATE`,
    /// `OVERLAPS` or quantified comparisons.
    Restricted,
}

/// An operator recognized after a complete operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfixForm {
    Binary(BinaryOp),
    /// `OPERATOR(schema.op)`.
    Qualified,
    /// `IS [NOT] ...`.
    Is,
    /// `ISNULL` / `NOTNULL`.
    NullTest { negated: bool },
    Between { negated: bool },
    In { negated: bool },
    Pattern { op: PatternOp, negated: bool },
    AtTimeZone,
    Collate,
    Overlaps,
    TypeCast,
    Postfix,
}

/// Maps a single-token operator to its tree tag and precedence class.
const fn binary_operator(kind: TokenKind) -> Option<(BinaryOp, OperatorClass)> {
    use OperatorClass::{Additive, Comparison, Exponent, Multiplicative, UserOperator};
    let op = match kind {
        TokenKind::Eq => (BinaryOp::Eq, Comparison),
        TokenKind::NotEq => (BinaryOp::NotEq, Comparison),
        TokenKind::Lt => (BinaryOp::Lt, Comparison),
        TokenKind::LtEq => (BinaryOp::LtEq, Comparison),
        TokenKind::Gt => (BinaryOp::Gt, Comparison),
        TokenKind::GtEq => (BinaryOp::GtEq, Comparison),
        TokenKind::Plus => (BinaryOp::Add, Additive),
        TokenKind::Minus => (BinaryOp::Sub, Additive),
        TokenKind::Star => (BinaryOp::Mul, Multiplicative),
        TokenKind::Slash => (BinaryOp::Div, Multiplicative),
        TokenKind::Percent => (BinaryOp::Mod, Multiplicative),
        TokenKind::Caret => (BinaryOp::Exp, Exponent),
        TokenKind::Concat => (BinaryOp::Concat, UserOperator),
        TokenKind::Ampersand => (BinaryOp::BitAnd, UserOperator),
        TokenKind::Pipe => (BinaryOp::BitOr, UserOperator),
        TokenKind::Hash => (BinaryOp::BitXor, UserOperator),
        TokenKind::ShiftLeft => (BinaryOp::ShiftLeft, UserOperator),
        TokenKind::ShiftRight => (BinaryOp::ShiftRight, UserOperator),
        TokenKind::Tilde => (BinaryOp::RegexMatch, UserOperator),
        TokenKind::TildeStar => (BinaryOp::RegexIMatch, UserOperator),
        TokenKind::NotTilde => (BinaryOp::NotRegexMatch, UserOperator),
        TokenKind::NotTildeStar => (BinaryOp::NotRegexIMatch, UserOperator),
        TokenKind::DoubleTilde => (BinaryOp::Like, UserOperator),
        TokenKind::NotDoubleTilde => (BinaryOp::NotLike, UserOperator),
        TokenKind::DoubleTildeStar => (BinaryOp::ILike, UserOperator),
        TokenKind::NotDoubleTildeStar => (BinaryOp::NotILike, UserOperator),
        TokenKind::Arrow => (BinaryOp::JsonExtract, UserOperator),
        TokenKind::LongArrow => (BinaryOp::JsonExtractText, UserOperator),
        TokenKind::HashArrow => (BinaryOp::JsonPathExtract, UserOperator),
        TokenKind::HashLongArrow => (BinaryOp::JsonPathExtractText, UserOperator),
        TokenKind::AtGt => (BinaryOp::JsonbContains, UserOperator),
        TokenKind::LtAt => (BinaryOp::JsonbContainedBy, UserOperator),
        TokenKind::QuestionMark => (BinaryOp::JsonbHasKey, UserOperator),
        TokenKind::QuestionPipe => (BinaryOp::JsonbHasAnyKey, UserOperator),
        TokenKind::QuestionAmpersand => (BinaryOp::JsonbHasAllKeys, UserOperator),
        TokenKind::HashMinus => (BinaryOp::JsonbDeletePath, UserOperator),
        TokenKind::AtQuestion => (BinaryOp::JsonbPathExists, UserOperator),
        TokenKind::AtAt => (BinaryOp::JsonbPathMatch, UserOperator),
        TokenKind::Operator => (BinaryOp::Custom, UserOperator),
        _ => return None,
    };
    Some(op)
}

/// Labels recorded when `IS [NOT]` is not followed by a known test.
const IS_TEST_LABELS: &[&str] = &[
    "NULL",
    "TRUE",
    "FALSE",
    "UNKNOWN",
    "DOCUMENT",
    "NORMALIZED",
    "DISTINCT",
    "OF",
];

impl Parser<'_> {
    /// Parses an expression whose operators all bind at least `min_bp`.
    pub(super) fn parse_expr_bp(&mut self, min_bp: u8, mode: ExprMode) -> PResult {
        self.nested(|p| p.climb(min_bp, mode))
    }

    fn climb(&mut self, min_bp: u8, mode: ExprMode) -> PResult {
        let cp = self.builder.checkpoint();
        self.parse_prefix(mode)?;

        let table = self.precedence();
        let mut previous: Option<u8> = None;
        while let Some((form, class)) = self.peek_infix(mode) {
            let Some(level) = table.level_of(class) else {
                break;
            };
            let (left_bp, right_bp) = level.binding_power();
            if left_bp < min_bp {
                break;
            }
            if level.associativity == Associativity::NonAssoc && previous == Some(level.level) {
                let found = self.peek(0).clone();
                return Err(ParseError::unexpected(
                    "non-associative operator sequence",
                    Vec::new(),
                    &found,
                ));
            }
            self.parse_infix(cp, form, right_bp, mode)?;
            previous = Some(level.level);
        }
        Ok(())
    }

    /// Parses a prefix operator application or a primary expression.
    fn parse_prefix(&mut self, mode: ExprMode) -> PResult {
        let kind = self.peek_kind(0);
        let (op, class, qualified) = match kind {
            TokenKind::Keyword(Keyword::Not) if mode == ExprMode::Full => {
                (PrefixOp::Not, OperatorClass::Not, false)
            }
            TokenKind::Plus => (PrefixOp::Plus, OperatorClass::UnarySign, false),
            TokenKind::Minus => (PrefixOp::Minus, OperatorClass::UnarySign, false),
            TokenKind::Keyword(Keyword::Operator) if self.peek_kind(1) == TokenKind::LeftParen => {
                (PrefixOp::Custom, OperatorClass::UserOperator, true)
            }
            k if k.is_user_operator() => (PrefixOp::Custom, OperatorClass::UserOperator, false),
            _ => return self.parse_primary(),
        };
        let bp = self.precedence().prefix_binding_power(class).unwrap_or(0);
        self.node(Rule::Expr(ExprForm::Prefix(op)), |p| {
            if qualified {
                p.parse_qualified_operator()?;
            } else {
                p.advance();
            }
            p.parse_expr_bp(bp, mode)
        })
    }

    /// Identifies the infix form at the current token, if any.
    fn peek_infix(&mut self, mode: ExprMode) -> Option<(InfixForm, OperatorClass)> {
        let full = mode == ExprMode::Full;
        let kind = self.peek_kind(0);
        let form = match kind {
            TokenKind::DoubleColon => (InfixForm::TypeCast, OperatorClass::TypeCast),
            TokenKind::Keyword(keyword) => return self.peek_keyword_infix(keyword, full),
            _ => {
                let (op, class) = binary_operator(kind)?;
                let postfix = class == OperatorClass::UserOperator
                    && kind != TokenKind::QuestionMark
                    && !self.can_start_expr(1)
                    && self.peek_quantifier(1).is_none();
                if postfix {
                    (InfixForm::Postfix, class)
                } else {
                    (InfixForm::Binary(op), class)
                }
            }
        };
        Some(form)
    }

    fn peek_keyword_infix(
        &mut self,
        keyword: Keyword,
        full: bool,
    ) -> Option<(InfixForm, OperatorClass)> {
        let form = match keyword {
            Keyword::Operator if self.peek_kind(1) == TokenKind::LeftParen => {
                (InfixForm::Qualified, OperatorClass::UserOperator)
            }
            Keyword::Is => {
                let at = 1 + usize::from(self.peek_is(1, Keyword::Not));
                let restricted_ok = matches!(
                    self.peek_keyword(at),
                    Some(Keyword::Distinct | Keyword::Of | Keyword::Document)
                );
                if !full && !restricted_ok {
                    return None;
                }
                (InfixForm::Is, OperatorClass::Is)
            }
            _ if !full => return None,
            Keyword::Or => (InfixForm::Binary(BinaryOp::Or), OperatorClass::Or),
            Keyword::And => (InfixForm::Binary(BinaryOp::And), OperatorClass::And),
            Keyword::IsNull => (InfixForm::NullTest { negated: false }, OperatorClass::Is),
            Keyword::NotNull => (InfixForm::NullTest { negated: true }, OperatorClass::Is),
            Keyword::Between => (
                InfixForm::Between { negated: false },
                OperatorClass::PatternRange,
            ),
            Keyword::In => (InfixForm::In { negated: false }, OperatorClass::PatternRange),
            Keyword::Like | Keyword::ILike | Keyword::Similar => {
                let op = self.pattern_op_at(0)?;
                (
                    InfixForm::Pattern { op, negated: false },
                    OperatorClass::PatternRange,
                )
            }
            Keyword::Not => {
                let form = match self.peek_keyword(1)? {
                    Keyword::Between => InfixForm::Between { negated: true },
                    Keyword::In => InfixForm::In { negated: true },
                    Keyword::Like | Keyword::ILike | Keyword::Similar => InfixForm::Pattern {
                        op: self.pattern_op_at(1)?,
                        negated: true,
                    },
                    _ => return None,
                };
                (form, OperatorClass::PatternRange)
            }
            Keyword::Overlaps => (InfixForm::Overlaps, OperatorClass::PatternRange),
            Keyword::At if self.peek_is(1, Keyword::Time) && self.peek_is(2, Keyword::Zone) => {
                (InfixForm::AtTimeZone, OperatorClass::AtTimeZone)
            }
            Keyword::Collate => (InfixForm::Collate, OperatorClass::Collate),
            _ => return None,
        };
        Some(form)
    }

    /// `LIKE`, `ILIKE` or `SIMILAR TO` at offset `k`.
    fn pattern_op_at(&mut self, k: usize) -> Option<PatternOp> {
        match self.peek_keyword(k)? {
            Keyword::Like => Some(PatternOp::Like),
            Keyword::ILike => Some(PatternOp::ILike),
            Keyword::Similar if self.peek_is(k + 1, Keyword::To) => Some(PatternOp::SimilarTo),
            _ => None,
        }
    }

    /// `ANY|SOME|ALL (` at offset `k`.
    pub(super) fn peek_quantifier(&mut self, k: usize) -> Option<SubqueryQuantifier> {
        let quantifier = match self.peek_keyword(k)? {
            Keyword::Any => SubqueryQuantifier::Any,
            Keyword::Some => SubqueryQuantifier::Some,
            Keyword::All => SubqueryQuantifier::All,
            _ => return None,
        };
        (self.peek_kind(k + 1) == TokenKind::LeftParen).then_some(quantifier)
    }

    /// Number of tokens in the `OPERATOR(...)` starting at the current
    /// token.
    fn qualified_operator_len(&mut self) -> usize {
        let mut k = 2;
        while !matches!(
            self.peek_kind(k),
            TokenKind::RightParen | TokenKind::Eof | TokenKind::Invalid
        ) {
            k += 1;
        }
        k + 1
    }

    fn parse_infix(
        &mut self,
        cp: Checkpoint,
        form: InfixForm,
        right_bp: u8,
        mode: ExprMode,
    ) -> PResult {
        let full = mode == ExprMode::Full;
        match form {
            InfixForm::Binary(op) => {
                let quantifier = if full && !matches!(op, BinaryOp::Or | BinaryOp::And) {
                    self.peek_quantifier(1)
                } else {
                    None
                };
                if let Some(quantifier) = quantifier {
                    return self.node_at(cp, Rule::Expr(ExprForm::Quantified { quantifier }), |p| {
                        p.advance();
                        p.parse_quantified_operand()
                    });
                }
                self.node_at(cp, Rule::Expr(ExprForm::Binary(op)), |p| {
                    p.advance();
                    p.parse_expr_bp(right_bp, mode)
                })
            }
            InfixForm::Qualified => {
                let len = self.qualified_operator_len();
                let quantifier = if full { self.peek_quantifier(len) } else { None };
                if let Some(quantifier) = quantifier {
                    return self.node_at(cp, Rule::Expr(ExprForm::Quantified { quantifier }), |p| {
                        p.parse_qualified_operator()?;
                        p.parse_quantified_operand()
                    });
                }
                let postfix = !self.can_start_expr(len);
                let rule = if postfix {
                    Rule::Expr(ExprForm::Postfix)
                } else {
                    Rule::Expr(ExprForm::Binary(BinaryOp::Custom))
                };
                self.node_at(cp, rule, |p| {
                    p.parse_qualified_operator()?;
                    if postfix {
                        Ok(())
                    } else {
                        p.parse_expr_bp(right_bp, mode)
                    }
                })
            }
            InfixForm::Is => self.parse_is_predicate(cp, right_bp, mode),
            InfixForm::NullTest { negated } => self.node_at(
                cp,
                Rule::Expr(ExprForm::IsTest {
                    test: IsTestKind::Null,
                    negated,
                }),
                |p| {
                    p.advance();
                    Ok(())
                },
            ),
            InfixForm::Between { negated } => {
                let at = 1 + usize::from(negated);
                let between = match self.peek_keyword(at) {
                    Some(Keyword::Asymmetric) => BetweenMode::Asymmetric,
                    Some(Keyword::Symmetric) => BetweenMode::Symmetric,
                    _ => BetweenMode::Default,
                };
                let rule = Rule::Expr(ExprForm::Between {
                    negated,
                    mode: between,
                });
                self.node_at(cp, rule, |p| {
                    p.advance_n(at);
                    if between != BetweenMode::Default {
                        p.advance();
                    }
                    p.parse_expr_bp(0, ExprMode::Restricted)?;
                    p.expect_keyword(Keyword::And, "BETWEEN predicate")?;
                    p.parse_expr_bp(right_bp, mode)
                })
            }
            InfixForm::In { negated } => {
                self.node_at(cp, Rule::Expr(ExprForm::In { negated }), |p| {
                    p.advance_n(1 + usize::from(negated));
                    if p.scan_select_in_parens() {
                        p.parse_select_with_parens()
                    } else {
                        p.parse_paren_expr_list("IN list")
                    }
                })
            }
            InfixForm::Pattern { op, negated } => {
                let len = usize::from(negated) + if op == PatternOp::SimilarTo { 2 } else { 1 };
                let quantifier = if op == PatternOp::SimilarTo {
                    None
                } else {
                    self.peek_quantifier(len)
                };
                if let Some(quantifier) = quantifier {
                    return self.node_at(cp, Rule::Expr(ExprForm::Quantified { quantifier }), |p| {
                        p.advance_n(len);
                        p.parse_quantified_operand()
                    });
                }
                let escape_bp = self
                    .precedence()
                    .binding_power(OperatorClass::Escape)
                    .map_or(right_bp, |(_, r)| r);
                self.node_at(cp, Rule::Expr(ExprForm::Pattern { op, negated }), |p| {
                    p.advance_n(len);
                    p.parse_expr_bp(right_bp, mode)?;
                    if p.eat_keyword(Keyword::Escape) {
                        p.parse_expr_bp(escape_bp, mode)?;
                    }
                    Ok(())
                })
            }
            InfixForm::AtTimeZone => self.node_at(cp, Rule::Expr(ExprForm::AtTimeZone), |p| {
                p.advance_n(3);
                p.parse_expr_bp(right_bp, mode)
            }),
            InfixForm::Collate => self.node_at(cp, Rule::Expr(ExprForm::Collate), |p| {
                p.advance();
                p.parse_qualified_name("COLLATE clause")
            }),
            InfixForm::Overlaps => self.node_at(cp, Rule::Expr(ExprForm::Overlaps), |p| {
                p.advance();
                p.parse_expr_bp(right_bp, mode)
            }),
            InfixForm::TypeCast => self.node_at(cp, Rule::TypeCast, |p| {
                p.advance();
                p.parse_type_name()
            }),
            InfixForm::Postfix => self.node_at(cp, Rule::Expr(ExprForm::Postfix), |p| {
                p.advance();
                Ok(())
            }),
        }
    }

    /// `IS [NOT] NULL|TRUE|FALSE|UNKNOWN|DOCUMENT|[form] NORMALIZED`,
    /// `IS [NOT] DISTINCT FROM expr` and `IS [NOT] OF (types)`.
    fn parse_is_predicate(&mut self, cp: Checkpoint, right_bp: u8, mode: ExprMode) -> PResult {
        let negated = self.peek_is(1, Keyword::Not);
        let at = 1 + usize::from(negated);
        let test = |test| {
            Some(Rule::Expr(ExprForm::IsTest { test, negated }))
        };
        let rule = match self.peek_keyword(at) {
            Some(Keyword::Null) => test(IsTestKind::Null),
            Some(Keyword::True) => test(IsTestKind::True),
            Some(Keyword::False) => test(IsTestKind::False),
            Some(Keyword::Unknown) => test(IsTestKind::Unknown),
            Some(Keyword::Document) => test(IsTestKind::Document),
            Some(Keyword::Normalized) => test(IsTestKind::Normalized),
            Some(Keyword::Nfc | Keyword::Nfd | Keyword::Nfkc | Keyword::Nfkd)
                if self.peek_is(at + 1, Keyword::Normalized) =>
            {
                test(IsTestKind::Normalized)
            }
            Some(Keyword::Distinct) => Some(Rule::Expr(ExprForm::DistinctFrom { negated })),
            Some(Keyword::Of) => Some(Rule::Expr(ExprForm::IsOf { negated })),
            _ => None,
        };
        let Some(rule) = rule else {
            self.advance_n(at);
            self.expect_labels(IS_TEST_LABELS);
            return Err(self.error_at_current("IS predicate"));
        };
        self.node_at(cp, rule, |p| {
            p.advance_n(at);
            match rule {
                Rule::Expr(ExprForm::DistinctFrom { .. }) => {
                    p.advance();
                    p.expect_keyword(Keyword::From, "IS DISTINCT FROM predicate")?;
                    p.parse_expr_bp(right_bp, mode)
                }
                Rule::Expr(ExprForm::IsOf { .. }) => {
                    p.advance();
                    p.expect(TokenKind::LeftParen, "IS OF predicate")?;
                    p.parse_type_list()?;
                    p.expect(TokenKind::RightParen, "IS OF predicate")
                }
                Rule::Expr(ExprForm::IsTest {
                    test: IsTestKind::Normalized,
                    ..
                }) => {
                    if !p.peek_is(0, Keyword::Normalized) {
                        p.advance();
                    }
                    p.advance();
                    Ok(())
                }
                _ => {
                    p.advance();
                    Ok(())
                }
            }
        })
    }

    /// `ANY|SOME|ALL` followed by `(select)` or `(expr)`.
    fn parse_quantified_operand(&mut self) -> PResult {
        self.advance();
        if self.scan_select_in_parens() {
            self.parse_select_with_parens()
        } else {
            self.expect(TokenKind::LeftParen, "quantified comparison")?;
            self.parse_a_expr()?;
            self.expect(TokenKind::RightParen, "quantified comparison")
        }
    }

    /// `OPERATOR ( [schema .]* op )`.
    pub(super) fn parse_qualified_operator(&mut self) -> PResult {
        self.node(Rule::QualifiedOperator, |p| {
            p.expect_keyword(Keyword::Operator, "qualified operator")?;
            p.expect(TokenKind::LeftParen, "qualified operator")?;
            while p.peek_kind(0).is_word() && p.peek_kind(1) == TokenKind::Dot {
                p.parse_col_id("qualified operator")?;
                p.advance();
            }
            if p.peek_is_operator(0) {
                p.advance();
            } else {
                p.expect_label("operator");
                return Err(p.error_at_current("qualified operator"));
            }
            p.expect(TokenKind::RightParen, "qualified operator")
        })
    }

    /// Returns true if the token at `k` is any operator spelling.
    pub(super) fn peek_is_operator(&mut self, k: usize) -> bool {
        binary_operator(self.peek_kind(k)).is_some()
    }
}

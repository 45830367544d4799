//! Name productions: `ColId`, `ColLabel`, `type_function_name`, qualified
//! names, name lists and indirection.

use super::parser::{PResult, Parser, COL_ID_LABELS, TYPE_FUNCTION_NAME_LABELS};
use crate::lexer::{KeywordClass, TokenKind};
use crate::tree::{IndirectionKind, Rule};

impl Parser<'_> {
    /// Consumes a name whose keyword class satisfies `accepts`, or fails
    /// naming `labels` as expected.
    fn parse_name_of_class(
        &mut self,
        accepts: fn(KeywordClass) -> bool,
        labels: &[&'static str],
        construct: &str,
    ) -> PResult {
        if self.peek_class(0).is_some_and(accepts) {
            self.advance();
            Ok(())
        } else {
            self.expect_labels(labels);
            Err(self.error_at_current(construct))
        }
    }

    /// `ColId`: identifiers, unreserved and column-name keywords.
    pub(super) fn parse_col_id(&mut self, construct: &str) -> PResult {
        self.parse_name_of_class(KeywordClass::is_col_id, COL_ID_LABELS, construct)
    }

    /// `type_function_name`: identifiers, unreserved and type/function
    /// keywords.
    pub(super) fn parse_type_function_name(&mut self, construct: &str) -> PResult {
        self.parse_name_of_class(
            KeywordClass::is_type_function_name,
            TYPE_FUNCTION_NAME_LABELS,
            construct,
        )
    }

    /// `NonReservedWord`: anything but a reserved keyword.
    pub(super) fn parse_non_reserved_word(&mut self, construct: &str) -> PResult {
        self.parse_name_of_class(
            KeywordClass::is_non_reserved,
            &[
                KeywordClass::PlainIdentifier.describe(),
                KeywordClass::Unreserved.describe(),
                KeywordClass::ColumnName.describe(),
                KeywordClass::TypeFuncName.describe(),
            ],
            construct,
        )
    }

    /// `ColLabel`: any identifier or keyword.
    pub(super) fn parse_col_label(&mut self, construct: &str) -> PResult {
        self.parse_name_of_class(
            KeywordClass::is_col_label,
            &[KeywordClass::PlainIdentifier.describe(), "keyword"],
            construct,
        )
    }

    /// Returns true if the token at `k` is usable as a `ColId`.
    pub(super) fn peek_is_col_id(&mut self, k: usize) -> bool {
        self.peek_class(k).is_some_and(KeywordClass::is_col_id)
    }

    /// `.ColLabel` repeated.
    fn parse_attrs(&mut self, construct: &str) -> PResult {
        while self.peek_kind(0) == TokenKind::Dot && self.peek_kind(1).is_word() {
            self.advance();
            self.parse_col_label(construct)?;
        }
        Ok(())
    }

    /// `ColId [.ColLabel ...]`, used for relations, collations, operator
    /// classes and other catalog objects.
    pub(super) fn parse_qualified_name(&mut self, construct: &str) -> PResult {
        self.node(Rule::QualifiedName, |p| {
            p.parse_col_id(construct)?;
            p.parse_attrs(construct)
        })
    }

    /// `qualified_name (, qualified_name)*` without a wrapping node.
    pub(super) fn parse_qualified_name_list(&mut self, construct: &str) -> PResult {
        self.parse_qualified_name(construct)?;
        while self.eat(TokenKind::Comma) {
            self.parse_qualified_name(construct)?;
        }
        Ok(())
    }

    /// `ColId (, ColId)*`.
    pub(super) fn parse_name_list(&mut self, construct: &str) -> PResult {
        self.node(Rule::NameList, |p| {
            p.parse_col_id(construct)?;
            while p.eat(TokenKind::Comma) {
                p.parse_col_id(construct)?;
            }
            Ok(())
        })
    }

    /// `( name_list )`.
    pub(super) fn parse_paren_name_list(&mut self, construct: &str) -> PResult {
        self.expect(TokenKind::LeftParen, construct)?;
        self.parse_name_list(construct)?;
        self.expect(TokenKind::RightParen, construct)
    }

    /// `func_name`: a bare `type_function_name` or a qualified name
    /// starting with a `ColId`.
    pub(super) fn parse_func_name(&mut self) -> PResult {
        self.node(Rule::FuncName, |p| {
            if p.peek_kind(1) == TokenKind::Dot {
                p.parse_col_id("function name")?;
                p.parse_attrs("function name")
            } else {
                p.parse_type_function_name("function name")
            }
        })
    }

    /// Field selections, `.*` and subscripts following a value.
    pub(super) fn parse_opt_indirection(&mut self) -> PResult {
        if !matches!(self.peek_kind(0), TokenKind::Dot | TokenKind::LeftBracket) {
            return Ok(());
        }
        self.node(Rule::Indirection, |p| loop {
            match p.peek_kind(0) {
                TokenKind::Dot if p.peek_kind(1) == TokenKind::Star => {
                    p.node(Rule::IndirectionEl(IndirectionKind::Star), |p| {
                        p.advance_n(2);
                        Ok(())
                    })?;
                }
                TokenKind::Dot => {
                    p.node(Rule::IndirectionEl(IndirectionKind::Field), |p| {
                        p.advance();
                        p.parse_col_label("field selection")
                    })?;
                }
                TokenKind::LeftBracket => p.parse_subscript()?,
                _ => return Ok(()),
            }
        })
    }

    /// `[expr]` or `[lower:upper]` with either bound optional.
    fn parse_subscript(&mut self) -> PResult {
        let cp = self.builder.checkpoint();
        self.advance();
        if self.peek_kind(0) != TokenKind::Colon {
            self.parse_a_expr()?;
        }
        let kind = if self.eat(TokenKind::Colon) {
            if self.peek_kind(0) != TokenKind::RightBracket {
                self.parse_a_expr()?;
            }
            IndirectionKind::Slice
        } else {
            IndirectionKind::Subscript
        };
        self.expect(TokenKind::RightBracket, "array subscript")?;
        self.wrap(cp, Rule::IndirectionEl(kind));
        Ok(())
    }

    /// `ColId [indirection]` as a column reference.
    pub(super) fn parse_column_ref(&mut self) -> PResult {
        self.node(Rule::ColumnRef, |p| {
            p.parse_col_id("column reference")?;
            p.parse_opt_indirection()
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::PostgresDialect;
    use crate::parser::Parser;
    use crate::tree::{IndirectionKind, Rule};

    static DIALECT: PostgresDialect = PostgresDialect::new();

    #[test]
    fn test_indirection_elements() {
        let root = Parser::new("a.b[1][2:3][:4].*", &DIALECT)
            .parse_expression()
            .into_result()
            .unwrap_or_else(|e| panic!("{e:?}"));
        assert_eq!(root.rule(), Rule::ColumnRef);
        let indirection = root.child(Rule::Indirection).expect("indirection");
        let kinds: Vec<Rule> = indirection.child_nodes().map(|n| n.rule()).collect();
        assert_eq!(
            kinds,
            vec![
                Rule::IndirectionEl(IndirectionKind::Field),
                Rule::IndirectionEl(IndirectionKind::Subscript),
                Rule::IndirectionEl(IndirectionKind::Slice),
                Rule::IndirectionEl(IndirectionKind::Slice),
                Rule::IndirectionEl(IndirectionKind::Star),
            ]
        );
    }

    #[test]
    fn test_reserved_word_is_not_a_column() {
        let result = Parser::new("SELECT a FROM select", &DIALECT).parse_statement();
        let error = &result.errors()[0];
        assert!(error.expected.contains(&"identifier".to_string()));
        assert!(error.expected.contains(&"unreserved keyword".to_string()));
        assert!(error.expected.contains(&"column-name keyword".to_string()));
    }

    #[test]
    fn test_keywords_as_labels_after_dot() {
        assert!(Parser::new("SELECT t.select, t.from FROM t", &DIALECT)
            .parse_statement()
            .is_ok());
    }
}

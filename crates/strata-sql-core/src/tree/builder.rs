//! Checkpoint-based parse tree assembly.

use super::{Child, ParseNode, Rule};
use crate::lexer::{Span, Token};

/// A position in the builder's child stack.
///
/// A node started at a checkpoint adopts every child pushed since the
/// checkpoint was taken, which is how a left operand is wrapped after the
/// operator following it has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Builds a [`ParseNode`] tree bottom-up from a flat child stack.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    children: Vec<Child>,
    open: Vec<(Rule, usize)>,
    last_end: usize,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current position.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.children.len())
    }

    /// Opens a node that will own everything pushed until the matching
    /// [`TreeBuilder::finish_node`].
    pub fn start_node(&mut self, rule: Rule) {
        self.open.push((rule, self.children.len()));
    }

    /// Opens a node that also adopts everything pushed since `checkpoint`.
    pub fn start_node_at(&mut self, checkpoint: Checkpoint, rule: Rule) {
        debug_assert!(checkpoint.0 <= self.children.len());
        debug_assert!(self.open.last().map_or(true, |&(_, start)| start <= checkpoint.0));
        self.open.push((rule, checkpoint.0));
    }

    /// Appends a token to the innermost open node.
    pub fn token(&mut self, token: Token) {
        self.last_end = token.span.end;
        self.children.push(Child::Token(token));
    }

    /// Closes the innermost open node.
    pub fn finish_node(&mut self) {
        let Some((rule, start)) = self.open.pop() else {
            return;
        };
        let children = self.children.split_off(start);
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => Span::empty(self.last_end),
        };
        self.children.push(Child::Node(ParseNode::new(rule, children, span)));
    }

    /// Rule of the most recently completed node, if the last child pushed
    /// was a node.
    #[must_use]
    pub fn last_node_rule(&self) -> Option<Rule> {
        match self.children.last() {
            Some(Child::Node(node)) => Some(node.rule()),
            _ => None,
        }
    }

    /// Number of nodes still open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Returns the finished tree, or `None` unless exactly one node was
    /// built and every node was closed.
    #[must_use]
    pub fn finish(mut self) -> Option<ParseNode> {
        if !self.open.is_empty() || self.children.len() != 1 {
            return None;
        }
        match self.children.pop() {
            Some(Child::Node(node)) => Some(node),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use crate::tree::{BinaryOp, ConstKind, ExprForm};

    fn tok(kind: TokenKind, text: &str, at: usize) -> Token {
        Token::new(kind, text, Span::new(at, at + text.len()))
    }

    fn int(builder: &mut TreeBuilder, text: &str, at: usize) {
        builder.start_node(Rule::Const(ConstKind::Integer));
        builder.token(tok(TokenKind::Integer, text, at));
        builder.finish_node();
    }

    #[test]
    fn test_checkpoint_wraps_left_operand() {
        // 1 - 2 - 3
        let mut builder = TreeBuilder::new();
        let cp = builder.checkpoint();
        int(&mut builder, "1", 0);
        for (i, at) in [(2, 4), (3, 8)] {
            builder.start_node_at(cp, Rule::Expr(ExprForm::Binary(BinaryOp::Sub)));
            builder.token(tok(TokenKind::Minus, "-", at - 2));
            int(&mut builder, &i.to_string(), at);
            builder.finish_node();
        }
        let root = builder.finish().expect("one root");
        assert_eq!(root.span(), Span::new(0, 9));
        assert_eq!(root.text(), "1 - 2 - 3");
        let left = root.child_nodes().next().expect("left operand");
        assert_eq!(left.rule(), Rule::Expr(ExprForm::Binary(BinaryOp::Sub)));
        assert_eq!(left.text(), "1 - 2");
    }

    #[test]
    fn test_empty_node_span() {
        let mut builder = TreeBuilder::new();
        builder.start_node(Rule::SimpleSelect);
        builder.token(tok(TokenKind::Identifier, "x", 0));
        builder.start_node(Rule::TargetList);
        builder.finish_node();
        assert_eq!(builder.last_node_rule(), Some(Rule::TargetList));
        builder.finish_node();
        let root = builder.finish().expect("one root");
        let list = root.child(Rule::TargetList).expect("target list");
        assert_eq!(list.span(), Span::empty(1));
    }

    #[test]
    fn test_unfinished_builder_yields_nothing() {
        let mut builder = TreeBuilder::new();
        builder.start_node(Rule::SimpleSelect);
        builder.token(tok(TokenKind::Identifier, "x", 0));
        assert_eq!(builder.depth(), 1);
        assert!(builder.finish().is_none());
        assert!(TreeBuilder::new().finish().is_none());
    }
}

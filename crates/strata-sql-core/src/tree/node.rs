//! Parse tree nodes.

use std::fmt::Write as _;

use super::Rule;
use crate::lexer::{Span, Token};

/// A child of a [`ParseNode`].
#[derive(Debug)]
pub enum Child {
    /// A nested production.
    Node(ParseNode),
    /// A terminal.
    Token(Token),
}

impl Child {
    /// The source span of this child.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Node(node) => node.span,
            Self::Token(token) => token.span,
        }
    }

    /// Returns the node, if this child is one.
    #[must_use]
    pub const fn as_node(&self) -> Option<&ParseNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    /// Returns the token, if this child is one.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Node(_) => None,
        }
    }
}

/// A node of the concrete syntax tree.
///
/// The token leaves of a node, read left to right, are exactly the tokens
/// of its source span. Traversals are iterative, so very deep trees (long
/// left-associative operator chains) are safe to walk and drop.
#[derive(Debug)]
pub struct ParseNode {
    rule: Rule,
    children: Vec<Child>,
    span: Span,
}

impl ParseNode {
    pub(crate) const fn new(rule: Rule, children: Vec<Child>, span: Span) -> Self {
        Self {
            rule,
            children,
            span,
        }
    }

    /// The production this node was built from.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// The source span covered by this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// All children in source order.
    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// The child nodes, skipping tokens.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Self> + '_ {
        self.children.iter().filter_map(Child::as_node)
    }

    /// The direct token children, skipping nodes.
    pub fn child_tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.children.iter().filter_map(Child::as_token)
    }

    /// Returns the first child node with the given rule.
    #[must_use]
    pub fn child(&self, rule: Rule) -> Option<&Self> {
        self.child_nodes().find(|n| n.rule == rule)
    }

    /// Every token leaf under this node, left to right.
    #[must_use]
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        let mut stack: Vec<std::slice::Iter<'_, Child>> = vec![self.children.iter()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(Child::Token(token)) => out.push(token),
                Some(Child::Node(node)) => stack.push(node.children.iter()),
                None => {
                    stack.pop();
                }
            }
        }
        out
    }

    /// Re-serializes the node as its token texts joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        let tokens = self.tokens();
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&token.text);
        }
        out
    }

    /// Finds the first node, in pre-order, whose rule satisfies `pred`.
    /// The node itself is included.
    pub fn find(&self, mut pred: impl FnMut(Rule) -> bool) -> Option<&Self> {
        self.preorder().find(|n| pred(n.rule))
    }

    /// Finds every node, in pre-order, whose rule satisfies `pred`.
    pub fn find_all(&self, mut pred: impl FnMut(Rule) -> bool) -> Vec<&Self> {
        self.preorder().filter(|n| pred(n.rule)).collect()
    }

    /// Iterates over this node and all descendant nodes in pre-order.
    pub fn preorder(&self) -> impl Iterator<Item = &Self> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.child_nodes().collect::<Vec<_>>().into_iter().rev());
            Some(node)
        })
    }

    /// Compares rules, shapes and token texts, ignoring spans.
    ///
    /// Two parses of the same statement that differ only in whitespace and
    /// comments are structurally equal.
    #[must_use]
    pub fn structurally_eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.rule != b.rule || a.children.len() != b.children.len() {
                return false;
            }
            for pair in a.children.iter().zip(&b.children) {
                match pair {
                    (Child::Node(x), Child::Node(y)) => stack.push((x, y)),
                    (Child::Token(x), Child::Token(y)) => {
                        if x.kind != y.kind || x.text != y.text {
                            return false;
                        }
                    }
                    _ => return false,
                }
            }
        }
        true
    }

    /// Renders the tree as an S-expression such as
    /// `(Expr(Binary(Add)) (Const(Integer) 1) + (Const(Integer) 2))`.
    #[must_use]
    pub fn to_sexp(&self) -> String {
        enum Step<'a> {
            Open(&'a ParseNode),
            Token(&'a Token),
            Close,
        }

        let mut out = String::new();
        let mut stack = vec![Step::Open(self)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node) => {
                    let _ = write!(out, "({:?}", node.rule);
                    stack.push(Step::Close);
                    for child in node.children.iter().rev() {
                        stack.push(match child {
                            Child::Node(n) => Step::Open(n),
                            Child::Token(t) => Step::Token(t),
                        });
                    }
                }
                Step::Token(token) => {
                    out.push(' ');
                    out.push_str(&token.text);
                }
                Step::Close => out.push(')'),
            }
            if matches!(stack.last(), Some(Step::Open(_))) {
                out.push(' ');
            }
        }
        out
    }
}

impl PartialEq for ParseNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.rule != b.rule || a.span != b.span || a.children.len() != b.children.len() {
                return false;
            }
            for pair in a.children.iter().zip(&b.children) {
                match pair {
                    (Child::Node(x), Child::Node(y)) => stack.push((x, y)),
                    (Child::Token(x), Child::Token(y)) => {
                        if x != y {
                            return false;
                        }
                    }
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for ParseNode {}

impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending: Vec<Self> = Vec::new();
        for child in self.children.drain(..) {
            if let Child::Node(node) = child {
                pending.push(node);
            }
        }
        while let Some(mut node) = pending.pop() {
            for child in node.children.drain(..) {
                if let Child::Node(grandchild) = child {
                    pending.push(grandchild);
                }
            }
        }
    }
}

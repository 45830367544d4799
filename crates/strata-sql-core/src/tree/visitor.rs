//! Listener and visitor traversal of parse trees.
//!
//! Both traversals keep their own explicit stack, so the depth of the tree
//! never translates into call-stack depth.

use super::{Child, ParseNode};
use crate::lexer::Token;

/// Receives enter/exit events for every node, depth-first and left to
/// right.
pub trait ParseTreeListener {
    /// Called before any child of `node`.
    fn enter_node(&mut self, _node: &ParseNode) {}

    /// Called after every child of `node`.
    fn exit_node(&mut self, _node: &ParseNode) {}

    /// Called for each token leaf, in source order.
    fn visit_token(&mut self, _token: &Token) {}
}

/// Drives a [`ParseTreeListener`] over a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseTreeWalker;

impl ParseTreeWalker {
    /// Walks `root`, firing listener events.
    pub fn walk<L: ParseTreeListener + ?Sized>(listener: &mut L, root: &ParseNode) {
        enum Event<'a> {
            Enter(&'a ParseNode),
            Exit(&'a ParseNode),
            Token(&'a Token),
        }

        let mut stack = vec![Event::Enter(root)];
        while let Some(event) = stack.pop() {
            match event {
                Event::Enter(node) => {
                    listener.enter_node(node);
                    stack.push(Event::Exit(node));
                    for child in node.children().iter().rev() {
                        stack.push(match child {
                            Child::Node(n) => Event::Enter(n),
                            Child::Token(t) => Event::Token(t),
                        });
                    }
                }
                Event::Exit(node) => listener.exit_node(node),
                Event::Token(token) => listener.visit_token(token),
            }
        }
    }
}

/// Synthesizes a value bottom-up from a tree.
pub trait ParseTreeVisitor {
    /// The value produced for each node and token.
    type Output;

    /// Combines the outputs of a node's children, in source order.
    fn visit_node(&mut self, node: &ParseNode, children: Vec<Self::Output>) -> Self::Output;

    /// Produces the output of a token leaf.
    fn visit_token(&mut self, token: &Token) -> Self::Output;
}

struct Frame<'a, T> {
    node: &'a ParseNode,
    next: usize,
    outputs: Vec<T>,
}

impl<'a, T> Frame<'a, T> {
    fn new(node: &'a ParseNode) -> Self {
        Self {
            node,
            next: 0,
            outputs: Vec::with_capacity(node.children().len()),
        }
    }
}

/// Runs `visitor` over `root` in post-order and returns the root's output.
pub fn visit<V: ParseTreeVisitor + ?Sized>(visitor: &mut V, root: &ParseNode) -> V::Output {
    let mut stack: Vec<Frame<'_, V::Output>> = Vec::new();
    let mut current = Frame::new(root);
    loop {
        let node = current.node;
        if let Some(child) = node.children().get(current.next) {
            current.next += 1;
            match child {
                Child::Token(token) => current.outputs.push(visitor.visit_token(token)),
                Child::Node(child) => stack.push(std::mem::replace(&mut current, Frame::new(child))),
            }
        } else {
            let output = visitor.visit_node(node, std::mem::take(&mut current.outputs));
            match stack.pop() {
                Some(parent) => {
                    current = parent;
                    current.outputs.push(output);
                }
                None => return output,
            }
        }
    }
}

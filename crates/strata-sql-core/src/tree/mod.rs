//! Concrete parse trees.
//!
//! The parser assembles a [`ParseNode`] tree through a [`TreeBuilder`].
//! Consumers read it through [`ParseTreeListener`]/[`ParseTreeWalker`] for
//! enter/exit events or through [`ParseTreeVisitor`]/[`visit`] to fold the
//! tree bottom-up into their own types.

mod builder;
mod node;
mod rule;
mod visitor;

pub use builder::{Checkpoint, TreeBuilder};
pub use node::{Child, ParseNode};
pub use rule::{
    BetweenMode, BinaryOp, ConflictActionKind, ConstKind, ExprForm, FrameBoundKind, FrameUnit,
    IndirectionKind, IsTestKind, JoinKind, PatternOp, PrefixOp, RowKind, Rule, SetOp,
    SetQuantifier, SpecialFunction, SubqueryQuantifier, TableRefKind,
};
pub use visitor::{visit, ParseTreeListener, ParseTreeVisitor, ParseTreeWalker};

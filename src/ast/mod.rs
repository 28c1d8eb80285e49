//! Syntax tree for AiScript programs.
//!
//! Nodes are closed enums rather than trait objects, so the checker can
//! match on them exhaustively and adding a node kind is a compile error
//! everywhere it matters. Every node carries the 1-based [`Loc`](crate::Loc)
//! of its first token.

pub mod expressions;
pub mod statements;
pub mod types;

use crate::Loc;

pub use expressions::Expression;
pub use statements::{Attribute, Meta, Namespace, Statement};
pub use types::TypeSource;

/// Anything that can appear in a statement position: top level, block
/// bodies, and branch arms all hold sequences of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Ns(Namespace),
    Meta(Meta),
    Statement(Statement),
    Expression(Expression),
}

impl Node {
    pub fn loc(&self) -> Loc {
        match self {
            Node::Ns(ns) => ns.loc,
            Node::Meta(meta) => meta.loc,
            Node::Statement(stmt) => stmt.loc(),
            Node::Expression(expr) => expr.loc(),
        }
    }
}

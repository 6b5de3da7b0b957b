//! Intermediate Representation for the grammar
//!
//! The grammar produces a tree of `ParseNode`s that mirrors the bracket structure of the text:
//! the keyword, the quoted name, the literal arguments in source order, and the nested nodes in
//! source order. Deciding which nested node fills which field (and whether it is allowed there at
//! all) is left to the builder.

use crate::ast::{AxisDirection, NodeKind};

/// A literal positional argument
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Numeric lexeme, not yet coerced
    Number(String),
    /// Authority code, unquoted
    Code(String),
    Direction(AxisDirection),
}

/// A node in the parse tree
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    pub kind: NodeKind,
    /// Quoted label; only TOWGS84 has none
    pub name: Option<String>,
    pub arguments: Vec<Argument>,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn new(
        kind: NodeKind,
        name: Option<String>,
        arguments: Vec<Argument>,
        children: Vec<ParseNode>,
    ) -> Self {
        Self {
            kind,
            name,
            arguments,
            children,
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ParseNode::node_count).sum::<usize>()
    }
}
